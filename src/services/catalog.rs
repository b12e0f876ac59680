use std::sync::Arc;

use crate::models::{BuyerProfile, Listing};
use crate::services::cache::{CacheError, CacheKey, CacheManager};
use crate::services::postgres::{PostgresClient, PostgresError};

/// Read-through access to listings and buyer profiles
///
/// Cache failures are logged and fall through to PostgreSQL; they never fail
/// a read. Without a cache every read goes to PostgreSQL.
#[derive(Clone)]
pub struct Catalog {
    postgres: Arc<PostgresClient>,
    cache: Option<Arc<CacheManager>>,
}

impl Catalog {
    pub fn new(postgres: Arc<PostgresClient>, cache: Option<Arc<CacheManager>>) -> Self {
        Self { postgres, cache }
    }

    pub fn postgres(&self) -> &PostgresClient {
        &self.postgres
    }

    /// Every listing, newest first
    pub async fn listings(&self) -> Result<Vec<Listing>, PostgresError> {
        let key = CacheKey::catalog();
        if let Some(listings) = self.cached::<Vec<Listing>>(&key).await {
            return Ok(listings);
        }

        let listings = self.postgres.list_listings().await?;
        self.store(&key, &listings).await;
        Ok(listings)
    }

    pub async fn listing(&self, listing_id: &str) -> Result<Option<Listing>, PostgresError> {
        let key = CacheKey::listing(listing_id);
        if let Some(listing) = self.cached::<Listing>(&key).await {
            return Ok(Some(listing));
        }

        let listing = self.postgres.get_listing(listing_id).await?;
        if let Some(listing) = &listing {
            self.store(&key, listing).await;
        }
        Ok(listing)
    }

    /// A buyer's profile; users who never onboarded get an empty one
    pub async fn profile(&self, user_id: &str) -> Result<BuyerProfile, PostgresError> {
        let key = CacheKey::profile(user_id);
        if let Some(profile) = self.cached::<BuyerProfile>(&key).await {
            return Ok(profile);
        }

        let profile = self.postgres.get_profile(user_id).await?.unwrap_or_default();
        self.store(&key, &profile).await;
        Ok(profile)
    }

    pub async fn save_profile(&self, user_id: &str, profile: &BuyerProfile) -> Result<(), PostgresError> {
        self.postgres.upsert_profile(user_id, profile).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.delete(&CacheKey::profile(user_id)).await {
                tracing::warn!("Failed to invalidate cached profile for {}: {}", user_id, e);
            }
        }
        Ok(())
    }

    async fn cached<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let cache = self.cache.as_ref()?;
        match cache.get(key).await {
            Ok(value) => Some(value),
            Err(CacheError::CacheMiss(_)) => None,
            Err(e) => {
                tracing::warn!("Cache read failed for {}, falling back to database: {}", key, e);
                None
            }
        }
    }

    async fn store<T: serde::Serialize>(&self, key: &str, value: &T) {
        let Some(cache) = &self.cache else {
            return;
        };
        if let Err(e) = cache.set(key, value).await {
            tracing::warn!("Cache write failed for {}: {}", key, e);
        }
    }
}
