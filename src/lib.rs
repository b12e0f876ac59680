//! Dealmatch - buyer-to-listing matching service for a business acquisition marketplace
//!
//! The core is a pure scoring heuristic that compares a buyer's onboarding
//! answers with a business-for-sale listing, plus the ranking pass built on
//! it. The service layer exposes it over HTTP next to catalog search and
//! saved/starred/contacted tracking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{calculate_match_score, calculate_score_breakdown, MatchSettings, Matcher};
pub use self::models::{BuyerProfile, Listing, ScoreBreakdown, ScoredListing};
