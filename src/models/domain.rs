use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Buyer onboarding answers
///
/// Every answer is optional. The four keys the scorer reads are typed fields;
/// any other questionnaire answer is kept verbatim in `answers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "revenuePreference", default, skip_serializing_if = "Option::is_none")]
    pub revenue_preference: Option<String>,
    #[serde(flatten)]
    pub answers: BTreeMap<String, String>,
}

impl BuyerProfile {
    /// Selected budget bucket, if answered
    pub fn budget(&self) -> Option<&str> {
        answered(&self.budget)
    }

    /// Selected industry, if answered
    pub fn industries(&self) -> Option<&str> {
        answered(&self.industries)
    }

    /// Selected location, if answered
    pub fn location(&self) -> Option<&str> {
        answered(&self.location)
    }

    /// Selected revenue bucket, if answered
    pub fn revenue_preference(&self) -> Option<&str> {
        answered(&self.revenue_preference)
    }

    /// True when no question has been answered at all
    pub fn is_empty(&self) -> bool {
        self.budget().is_none()
            && self.industries().is_none()
            && self.location().is_none()
            && self.revenue_preference().is_none()
            && self.answers.values().all(|v| v.is_empty())
    }
}

#[inline]
fn answered(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Business-for-sale record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub location: String,
    #[serde(rename = "askingPrice")]
    pub asking_price: f64,
    pub revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "yearEstablished", default, skip_serializing_if = "Option::is_none")]
    pub year_established: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<i32>,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(rename = "reasonForSelling", default, skip_serializing_if = "Option::is_none")]
    pub reason_for_selling: Option<String>,
    #[serde(default)]
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "listing_status", rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
}

/// Points awarded per factor; `None` means the factor was not evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u8>,
    pub total: u8,
}

impl ScoreBreakdown {
    /// Number of factors that contributed to the score
    pub fn factor_count(&self) -> u32 {
        [self.budget, self.industry, self.location, self.revenue]
            .iter()
            .filter(|f| f.is_some())
            .count() as u32
    }

    /// Sum of the points awarded across present factors
    pub fn points(&self) -> u32 {
        [self.budget, self.industry, self.location, self.revenue]
            .iter()
            .flatten()
            .map(|p| *p as u32)
            .sum()
    }
}

/// Listing annotated with its match score for one ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchFactors")]
    pub match_factors: ScoreBreakdown,
}

/// How a user is following a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "tracking_kind", rename_all = "lowercase")]
pub enum TrackingKind {
    Saved,
    Starred,
    Contacted,
}

impl std::str::FromStr for TrackingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saved" => Ok(TrackingKind::Saved),
            "starred" => Ok(TrackingKind::Starred),
            "contacted" => Ok(TrackingKind::Contacted),
            other => Err(format!(
                "unknown tracking kind '{}', expected one of: saved, starred, contacted",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "star_priority", rename_all = "lowercase")]
pub enum StarPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "inquiry_status", rename_all = "snake_case")]
pub enum InquiryStatus {
    Pending,
    Responded,
    InProgress,
    Closed,
}

/// A listing a user saved, starred or contacted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub kind: TrackingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<StarPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "inquiryStatus", skip_serializing_if = "Option::is_none")]
    pub inquiry_status: Option<InquiryStatus>,
    #[serde(rename = "trackedAt")]
    pub tracked_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
