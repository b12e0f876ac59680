// Service exports
pub mod cache;
pub mod catalog;
pub mod postgres;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use catalog::Catalog;
pub use postgres::{PostgresClient, PostgresError, TrackingDetails, TrackingStats};
