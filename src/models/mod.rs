// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BuyerProfile, InquiryStatus, Listing, ListingStatus, ScoreBreakdown, ScoredListing, StarPriority,
    TrackedListing, TrackingKind,
};
pub use requests::{
    InquiryStatusRequest, InterestRequest, MatchesQuery, RankRequest, SaveListingRequest, SearchQuery,
    StarListingRequest, TrackedQuery,
};
pub use responses::{
    ApiResponse, ErrorBody, ErrorResponse, HealthResponse, MatchesResponse, MessageResponse, Pagination,
};
