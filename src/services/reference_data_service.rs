use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::debug;

use crate::cache::{keys, CacheResult, ReferenceCache};
use crate::config::AppConfig;
use crate::error::DomainError;
use crate::models::{ReferenceData, ReferenceTable};

/// Source of truth for reference tables. Production wires this to the API
/// client; tests supply an in-memory implementation.
#[async_trait]
pub trait ReferenceDataProvider: Send + Sync {
    async fn load_all(&self, table: ReferenceTable) -> Result<Vec<ReferenceData>, DomainError>;
}

/// Cache-through reads over a [`ReferenceDataProvider`]. Every lookup
/// consults the cache first, falls back to the provider, and populates the
/// cache under the deterministic keys from [`crate::cache::keys`].
pub struct ReferenceDataService<P> {
    provider: P,
    cache: Arc<ReferenceCache>,
    ttl: Duration,
}

impl<P: ReferenceDataProvider> ReferenceDataService<P> {
    pub fn new(provider: P, cache: Arc<ReferenceCache>, ttl: Duration) -> Self {
        ReferenceDataService {
            provider,
            cache,
            ttl,
        }
    }

    /// Builds the service with the cache TTL configured for the
    /// environment.
    pub fn from_config(provider: P, cache: Arc<ReferenceCache>, config: &AppConfig) -> Self {
        Self::new(provider, cache, config.reference_cache_ttl())
    }

    pub async fn get_all(&self, table: ReferenceTable) -> Result<Vec<ReferenceData>, DomainError> {
        let key = keys::get_all_key(table);
        if let CacheResult::Hit(cached) = self.cache.get::<Vec<ReferenceData>>(&key).await {
            return Ok(cached);
        }

        let items = self.provider.load_all(table).await?;
        self.cache.set(&key, &items, self.ttl).await;
        debug!(table = %table, count = items.len(), "reference table loaded from provider");
        Ok(items)
    }

    pub async fn get_by_id(
        &self,
        table: ReferenceTable,
        id: &str,
    ) -> Result<ReferenceData, DomainError> {
        let key = keys::get_by_id_key(table, id);
        if let CacheResult::Hit(cached) = self.cache.get::<ReferenceData>(&key).await {
            return Ok(cached);
        }

        let items = self.provider.load_all(table).await?;
        let item = items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found(table.as_str(), id))?;
        self.cache.set(&key, &item, self.ttl).await;
        Ok(item)
    }

    /// Value lookups are case-insensitive: both the cache key and the
    /// comparison against provider rows are lower-cased.
    pub async fn get_by_value(
        &self,
        table: ReferenceTable,
        value: &str,
    ) -> Result<ReferenceData, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation("value cannot be empty"));
        }

        let key = keys::get_by_value_key(table, Some(value));
        if let CacheResult::Hit(cached) = self.cache.get::<ReferenceData>(&key).await {
            return Ok(cached);
        }

        let items = self.provider.load_all(table).await?;
        let item = items
            .into_iter()
            .find(|item| item.value.eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::not_found(table.as_str(), value))?;
        self.cache.set(&key, &item, self.ttl).await;
        Ok(item)
    }

    /// Drops every cached entry for the table, forcing the next read to hit
    /// the provider.
    pub async fn invalidate_table(&self, table: ReferenceTable) {
        self.cache
            .remove_by_pattern(&keys::table_pattern(table))
            .await;
    }
}
