use crate::core::scoring::calculate_score_breakdown;
use crate::models::{BuyerProfile, Listing, ScoredListing};

/// Ranking thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    /// Listings scoring below this are dropped
    pub min_score: u8,
    /// Maximum number of ranked listings returned
    pub limit: usize,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            min_score: 60,
            limit: 30,
        }
    }
}

/// Result of a ranking pass
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredListing>,
    pub total_candidates: usize,
}

/// Ranks candidate listings for a buyer profile
///
/// # Pipeline Stages
/// 1. Score every candidate
/// 2. Drop candidates under the minimum score
/// 3. Stable sort by score, descending
/// 4. Truncate to the limit
#[derive(Debug, Clone)]
pub struct Matcher {
    settings: MatchSettings,
}

impl Matcher {
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    pub fn with_default_settings() -> Self {
        Self {
            settings: MatchSettings::default(),
        }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Rank listings with the configured minimum score and limit
    pub fn find_matches(&self, profile: &BuyerProfile, candidates: Vec<Listing>) -> MatchResult {
        self.rank_and_filter(profile, candidates, self.settings.min_score, self.settings.limit)
    }

    /// Score, filter, sort and truncate candidate listings
    ///
    /// Ties keep their input order.
    pub fn rank_and_filter(
        &self,
        profile: &BuyerProfile,
        candidates: Vec<Listing>,
        min_score: u8,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredListing> = candidates
            .into_iter()
            .filter_map(|listing| {
                let breakdown = calculate_score_breakdown(profile, &listing);
                if breakdown.total >= min_score {
                    Some(ScoredListing {
                        listing,
                        match_score: breakdown.total,
                        match_factors: breakdown,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::{calculate_match_score, DEFAULT_SCORE};
    use crate::models::ListingStatus;

    fn create_candidate(id: &str, price: f64, industry: &str, location: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: format!("Business {}", id),
            industry: industry.to_string(),
            location: location.to_string(),
            asking_price: price,
            revenue: 800_000.0,
            ebitda: None,
            description: String::new(),
            year_established: None,
            employees: None,
            is_featured: false,
            images: vec![],
            highlights: vec![],
            reason_for_selling: None,
            status: ListingStatus::Active,
        }
    }

    fn create_profile() -> BuyerProfile {
        BuyerProfile {
            budget: Some("$1M - $5M".to_string()),
            industries: Some("Technology".to_string()),
            location: Some("Boston, MA".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_filters_and_sorts() {
        let matcher = Matcher::with_default_settings();
        let candidates = vec![
            // 25 + 0 + 10 = 35 -> 47
            create_candidate("1", 2_000_000.0, "Retail", "Austin, TX"),
            // 25 + 25 + 25 = 75 -> 95
            create_candidate("2", 2_000_000.0, "Technology", "Boston, MA"),
            // 15 + 25 + 25 = 65 -> 87
            create_candidate("3", 6_000_000.0, "Technology", "Boston, MA"),
            // 25 + 25 + 10 = 60 -> 80
            create_candidate("4", 2_000_000.0, "Technology", "Austin, TX"),
        ];

        let result = matcher.rank_and_filter(&create_profile(), candidates, 60, 30);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.listing.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.matches[0].match_score, 95);
        assert_eq!(result.matches[1].match_score, 87);
        assert_eq!(result.matches[2].match_score, 80);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_settings();
        let candidates: Vec<Listing> = (0..5)
            .map(|i| create_candidate(&i.to_string(), 2_000_000.0, "Technology", "Boston, MA"))
            .collect();

        let result = matcher.rank_and_filter(&create_profile(), candidates, 60, 30);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.listing.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_settings();
        let candidates: Vec<Listing> = (0..20)
            .map(|i| create_candidate(&i.to_string(), 2_000_000.0, "Technology", "Boston, MA"))
            .collect();

        let result = matcher.rank_and_filter(&create_profile(), candidates, 0, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_empty_profile_gets_fallback() {
        let matcher = Matcher::with_default_settings();
        let candidates = vec![
            create_candidate("1", 2_000_000.0, "Retail", "Austin, TX"),
            create_candidate("2", 90_000_000.0, "Technology", "Boston, MA"),
        ];

        let result = matcher.find_matches(&BuyerProfile::default(), candidates);

        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.iter().all(|m| m.match_score == DEFAULT_SCORE));
        assert_eq!(result.matches[0].listing.id, "1");
    }

    #[test]
    fn test_ranked_score_agrees_with_scorer() {
        let matcher = Matcher::new(MatchSettings {
            min_score: 0,
            limit: 10,
        });
        let unanswered = BuyerProfile {
            budget: Some(String::new()),
            location: Some("No preference".to_string()),
            ..Default::default()
        };
        let candidates = vec![
            create_candidate("1", 2_000_000.0, "Retail", "Austin, TX"),
            create_candidate("2", 6_000_000.0, "Technology", "Boston, MA"),
        ];

        for profile in [BuyerProfile::default(), unanswered, create_profile()] {
            let result = matcher.find_matches(&profile, candidates.clone());
            for m in &result.matches {
                assert_eq!(m.match_score, calculate_match_score(&profile, &m.listing));
                assert_eq!(m.match_factors.total, m.match_score);
            }
        }
    }

    #[test]
    fn test_min_score_above_fallback_drops_everything() {
        let matcher = Matcher::with_default_settings();
        let candidates = vec![create_candidate("1", 2_000_000.0, "Retail", "Austin, TX")];

        let result = matcher.rank_and_filter(&BuyerProfile::default(), candidates, 66, 30);

        assert!(result.matches.is_empty());
    }
}
