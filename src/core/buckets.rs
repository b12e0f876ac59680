/// Numeric range behind a questionnaire bucket label
///
/// Lower bound is inclusive, upper bound exclusive. `max == None` means the
/// bucket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    const fn bounded(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    const fn open(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Check whether an amount falls inside `[min, max)`
    #[inline]
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount < max)
    }

    /// Check whether an amount lies within `tolerance` (relative) of the upper bound
    ///
    /// Open-ended buckets have no upper bound to be near.
    #[inline]
    pub fn near_upper_bound(&self, amount: f64, tolerance: f64) -> bool {
        match self.max {
            Some(max) if max > 0.0 => (amount - max).abs() / max < tolerance,
            _ => false,
        }
    }
}

/// Bucket label paired with its range
pub type Bucket = (&'static str, PriceRange);

/// Asking-price buckets offered by the buyer questionnaire
pub const BUDGET_BUCKETS: [Bucket; 5] = [
    ("Under $500K", PriceRange::bounded(0.0, 500_000.0)),
    ("$500K - $1M", PriceRange::bounded(500_000.0, 1_000_000.0)),
    ("$1M - $5M", PriceRange::bounded(1_000_000.0, 5_000_000.0)),
    ("$5M - $10M", PriceRange::bounded(5_000_000.0, 10_000_000.0)),
    ("Over $10M", PriceRange::open(10_000_000.0)),
];

/// Revenue buckets; same boundaries as the budget table
///
/// The revenue question labels its top bucket `$10M+`. `Over $10M` is kept as
/// an alias so profiles written with the budget wording still resolve.
pub const REVENUE_BUCKETS: [Bucket; 6] = [
    ("Under $500K", PriceRange::bounded(0.0, 500_000.0)),
    ("$500K - $1M", PriceRange::bounded(500_000.0, 1_000_000.0)),
    ("$1M - $5M", PriceRange::bounded(1_000_000.0, 5_000_000.0)),
    ("$5M - $10M", PriceRange::bounded(5_000_000.0, 10_000_000.0)),
    ("$10M+", PriceRange::open(10_000_000.0)),
    ("Over $10M", PriceRange::open(10_000_000.0)),
];

#[inline]
fn lookup(table: &[Bucket], label: &str) -> Option<PriceRange> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, range)| *range)
}

/// Resolve a budget label to its price range
pub fn lookup_budget(label: &str) -> Option<PriceRange> {
    lookup(&BUDGET_BUCKETS, label)
}

/// Resolve a revenue-preference label to its revenue range
pub fn lookup_revenue(label: &str) -> Option<PriceRange> {
    lookup(&REVENUE_BUCKETS, label)
}
