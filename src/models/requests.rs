use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::SearchFilter;
use crate::models::domain::{BuyerProfile, InquiryStatus, Listing, StarPriority, TrackingKind};

/// Query string for the catalog search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub min_revenue: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_revenue: Option<f64>,
    /// 0 or absent means the first page
    pub page: Option<usize>,
    /// 0 or absent means the default page size
    pub page_size: Option<usize>,
}

impl SearchQuery {
    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            q: self.q.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_revenue: self.min_revenue,
            max_revenue: self.max_revenue,
        }
    }
}

/// Optional overrides for the curated matches endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchesQuery {
    #[validate(range(max = 100))]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Stateless ranking request
///
/// When `listings` is omitted the current catalog is ranked.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[serde(default)]
    pub profile: BuyerProfile,
    pub listings: Option<Vec<Listing>>,
    #[validate(range(max = 100))]
    pub min_score: Option<u8>,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SaveListingRequest {
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarListingRequest {
    pub priority: Option<StarPriority>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InterestRequest {
    #[validate(length(max = 5000))]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryStatusRequest {
    pub status: InquiryStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedQuery {
    pub kind: Option<TrackingKind>,
}
