// Core algorithm exports
pub mod buckets;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use buckets::{lookup_budget, lookup_revenue, PriceRange, BUDGET_BUCKETS, REVENUE_BUCKETS};
pub use filters::{matches_search, paginate, SearchFilter};
pub use matcher::{MatchResult, MatchSettings, Matcher};
pub use scoring::{calculate_match_score, calculate_score_breakdown};
