use crate::models::{Listing, Pagination};

/// Industry filter value that disables industry filtering
pub const ALL_INDUSTRIES: &str = "All Industries";

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Catalog search constraints; unset fields do not filter
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub q: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
}

/// Check if a listing satisfies every set search constraint
///
/// Text matches are case-insensitive substring checks; numeric bounds are
/// inclusive.
#[inline]
pub fn matches_search(listing: &Listing, filter: &SearchFilter) -> bool {
    if let Some(industry) = non_blank(&filter.industry) {
        if industry != ALL_INDUSTRIES && !contains_ci(&listing.industry, industry) {
            return false;
        }
    }

    if let Some(location) = non_blank(&filter.location) {
        if !contains_ci(&listing.location, location) {
            return false;
        }
    }

    if filter.min_price.is_some_and(|min| listing.asking_price < min)
        || filter.max_price.is_some_and(|max| listing.asking_price > max)
    {
        return false;
    }

    if filter.min_revenue.is_some_and(|min| listing.revenue < min)
        || filter.max_revenue.is_some_and(|max| listing.revenue > max)
    {
        return false;
    }

    if let Some(q) = non_blank(&filter.q) {
        let hit = contains_ci(&listing.name, q)
            || contains_ci(&listing.description, q)
            || contains_ci(&listing.industry, q)
            || contains_ci(&listing.location, q);
        if !hit {
            return false;
        }
    }

    true
}

/// Cut one page out of an already filtered result set
///
/// `page` is 1-based. Page size defaults to 10 and is capped at 100.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, page_size: Option<usize>) -> (Vec<T>, Pagination) {
    let page = page.filter(|p| *p > 0).unwrap_or(1);
    let page_size = page_size
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);

    let data: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    let pagination = Pagination {
        page,
        page_size,
        total,
        total_pages: total.div_ceil(page_size),
    };

    (data, pagination)
}

#[inline]
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[inline]
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
