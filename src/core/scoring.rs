use crate::core::buckets::{lookup_budget, lookup_revenue, PriceRange};
use crate::models::{BuyerProfile, Listing, ScoreBreakdown};

/// Points for a full match on one factor
pub const FULL_MATCH_POINTS: u8 = 25;
/// Points for a near miss (close price, related industry)
pub const NEAR_MATCH_POINTS: u8 = 15;
/// Points for a "remote/nationwide" or "other" location answer
pub const OPEN_LOCATION_POINTS: u8 = 15;
/// Location mismatch alone never zeroes the factor
pub const LOCATION_FLOOR_POINTS: u8 = 10;
/// Relative distance from a bucket ceiling that still counts as close
pub const NEAR_MISS_TOLERANCE: f64 = 0.3;
/// Highest score the heuristic will ever report
pub const MAX_SCORE: u8 = 95;
/// Score used when the profile answers none of the scored questions
pub const DEFAULT_SCORE: u8 = 65;

pub const MULTIPLE_INDUSTRIES: &str = "Multiple industries";
pub const REMOTE_LOCATION: &str = "Remote/Nationwide";
pub const OTHER_LOCATION: &str = "Other";
pub const NO_PREFERENCE: &str = "No preference";

/// Calculate a match score for a listing against a buyer profile
///
/// Each answered question contributes one factor worth up to 25 points; the
/// result is the share of the achievable points, rounded half-up and capped
/// at 95. A profile with no scored answers gets [`DEFAULT_SCORE`].
pub fn calculate_match_score(profile: &BuyerProfile, listing: &Listing) -> u8 {
    calculate_score_breakdown(profile, listing).total
}

/// Calculate the match score along with the points awarded by each factor
pub fn calculate_score_breakdown(profile: &BuyerProfile, listing: &Listing) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        budget: profile
            .budget()
            .map(|label| bucket_score(lookup_budget(label), listing.asking_price)),
        industry: profile
            .industries()
            .map(|preferred| industry_score(preferred, &listing.industry)),
        location: profile
            .location()
            .map(|preferred| location_score(preferred, &listing.location)),
        revenue: profile
            .revenue_preference()
            .filter(|label| *label != NO_PREFERENCE)
            .map(|label| bucket_score(lookup_revenue(label), listing.revenue)),
        total: DEFAULT_SCORE,
    };

    breakdown.total = combine(breakdown.points(), breakdown.factor_count()).unwrap_or(DEFAULT_SCORE);
    breakdown
}

/// Normalize summed points to a percentage of the factor maximum
///
/// Returns `None` when no factor was evaluated.
#[inline]
pub fn combine(points: u32, factors: u32) -> Option<u8> {
    if factors == 0 {
        return None;
    }

    // round(points * 100 / (25 * factors)), half-up, in integer arithmetic
    let percent = (8 * points + factors) / (2 * factors);
    Some(percent.min(MAX_SCORE as u32) as u8)
}

/// Budget and revenue factor: inside the bucket, close to its ceiling, or neither
///
/// An unrecognised bucket label still counts as an answered question.
#[inline]
fn bucket_score(range: Option<PriceRange>, amount: f64) -> u8 {
    match range {
        Some(range) if range.contains(amount) => FULL_MATCH_POINTS,
        Some(range) if range.near_upper_bound(amount, NEAR_MISS_TOLERANCE) => NEAR_MATCH_POINTS,
        _ => 0,
    }
}

#[inline]
fn industry_score(preferred: &str, industry: &str) -> u8 {
    if preferred == MULTIPLE_INDUSTRIES || preferred == industry {
        return FULL_MATCH_POINTS;
    }

    let keyword = preferred
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if industry.to_lowercase().contains(&keyword) {
        NEAR_MATCH_POINTS
    } else {
        0
    }
}

#[inline]
fn location_score(preferred: &str, location: &str) -> u8 {
    if preferred == REMOTE_LOCATION || preferred == OTHER_LOCATION {
        return OPEN_LOCATION_POINTS;
    }

    let city = preferred.split(',').next().unwrap_or_default();
    if location.contains(city) {
        FULL_MATCH_POINTS
    } else {
        LOCATION_FLOOR_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingStatus;

    fn create_test_listing(price: f64, revenue: f64, industry: &str, location: &str) -> Listing {
        Listing {
            id: "biz-1".to_string(),
            name: "Test Business".to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            asking_price: price,
            revenue,
            ebitda: None,
            description: String::new(),
            year_established: Some(2010),
            employees: Some(12),
            is_featured: false,
            images: vec![],
            highlights: vec![],
            reason_for_selling: None,
            status: ListingStatus::Active,
        }
    }

    fn create_test_profile() -> BuyerProfile {
        BuyerProfile {
            budget: Some("$1M - $5M".to_string()),
            industries: Some("Technology".to_string()),
            location: Some("Boston, MA".to_string()),
            revenue_preference: Some("No preference".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let listing = create_test_listing(2_500_000.0, 1_200_000.0, "Technology", "Boston, MA");
        let breakdown = calculate_score_breakdown(&create_test_profile(), &listing);

        assert_eq!(breakdown.budget, Some(25));
        assert_eq!(breakdown.industry, Some(25));
        assert_eq!(breakdown.location, Some(25));
        assert_eq!(breakdown.revenue, None);
        assert_eq!(breakdown.factor_count(), 3);
        assert_eq!(breakdown.points(), 75);
        // 100% before the cap
        assert_eq!(breakdown.total, 95);
    }

    #[test]
    fn test_empty_profile_uses_default() {
        let listing = create_test_listing(2_500_000.0, 1_200_000.0, "Technology", "Boston, MA");
        assert_eq!(calculate_match_score(&BuyerProfile::default(), &listing), DEFAULT_SCORE);
    }

    #[test]
    fn test_only_no_preference_revenue_uses_default() {
        let profile = BuyerProfile {
            revenue_preference: Some(NO_PREFERENCE.to_string()),
            ..Default::default()
        };
        let listing = create_test_listing(100_000.0, 0.0, "Retail", "Austin, TX");
        assert_eq!(calculate_match_score(&profile, &listing), DEFAULT_SCORE);
    }

    #[test]
    fn test_budget_factor() {
        let profile = BuyerProfile {
            budget: Some("$1M - $5M".to_string()),
            ..Default::default()
        };

        let in_range = create_test_listing(3_000_000.0, 0.0, "Retail", "Austin, TX");
        let near = create_test_listing(6_000_000.0, 0.0, "Retail", "Austin, TX");
        let far = create_test_listing(8_000_000.0, 0.0, "Retail", "Austin, TX");

        assert_eq!(calculate_score_breakdown(&profile, &in_range).budget, Some(25));
        assert_eq!(calculate_score_breakdown(&profile, &near).budget, Some(15));
        assert_eq!(calculate_score_breakdown(&profile, &far).budget, Some(0));
    }

    #[test]
    fn test_unknown_budget_label_scores_zero() {
        let profile = BuyerProfile {
            budget: Some("Whatever it takes".to_string()),
            ..Default::default()
        };
        let listing = create_test_listing(3_000_000.0, 0.0, "Retail", "Austin, TX");

        let breakdown = calculate_score_breakdown(&profile, &listing);
        assert_eq!(breakdown.budget, Some(0));
        assert_eq!(breakdown.total, 0);
    }

    #[test]
    fn test_industry_factor() {
        assert_eq!(industry_score("Technology", "Technology"), 25);
        assert_eq!(industry_score(MULTIPLE_INDUSTRIES, "Retail"), 25);
        assert_eq!(industry_score("Food & Beverage", "Specialty Food Manufacturing"), 15);
        assert_eq!(industry_score("Healthcare", "Retail"), 0);
        // exact match is case-sensitive, the keyword fallback is not
        assert_eq!(industry_score("technology", "Technology"), 15);
    }

    #[test]
    fn test_location_factor() {
        assert_eq!(location_score("Boston, MA", "Boston, MA"), 25);
        assert_eq!(location_score("Boston, MA", "Greater Boston Area"), 25);
        assert_eq!(location_score("Boston, MA", "Austin, TX"), 10);
        assert_eq!(location_score(REMOTE_LOCATION, "Austin, TX"), 15);
        assert_eq!(location_score(OTHER_LOCATION, "Boston, MA"), 15);
    }

    #[test]
    fn test_revenue_factor() {
        let profile = BuyerProfile {
            revenue_preference: Some("$10M+".to_string()),
            ..Default::default()
        };
        let listing = create_test_listing(20_000_000.0, 12_000_000.0, "Retail", "Austin, TX");
        assert_eq!(calculate_score_breakdown(&profile, &listing).revenue, Some(25));
    }

    #[test]
    fn test_combine_rounding() {
        // 65 * 4 / 3 = 86.67
        assert_eq!(combine(65, 3), Some(87));
        // 10 * 4 / 3 = 13.33
        assert_eq!(combine(10, 3), Some(13));
        // 50 * 4 / 3 = 66.67
        assert_eq!(combine(50, 3), Some(67));
        assert_eq!(combine(100, 4), Some(95));
        assert_eq!(combine(0, 2), Some(0));
        assert_eq!(combine(0, 0), None);
    }

    #[test]
    fn test_score_is_deterministic() {
        let profile = create_test_profile();
        let listing = create_test_listing(6_000_000.0, 1_200_000.0, "Software", "Cambridge, MA");

        let first = calculate_match_score(&profile, &listing);
        for _ in 0..10 {
            assert_eq!(calculate_match_score(&profile, &listing), first);
        }
    }
}
