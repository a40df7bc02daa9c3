use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Cache lookup outcome with an explicit hit/miss distinction, so callers
/// never have to guess whether an absent value was cached-as-empty.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Hit(T),
    Miss,
}

impl<T> CacheResult<T> {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheResult::Hit(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Hit(value) => Some(value),
            CacheResult::Miss => None,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    expires_at: DateTime<Utc>,
}

/// In-memory cache for reference data, keyed by the strings produced in
/// [`crate::cache::keys`]. Entries expire lazily: an expired entry counts
/// as a miss and is dropped on the next lookup.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        ReferenceCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        let expired = {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Utc::now() => {
                    match serde_json::from_value(entry.value.clone()) {
                        Ok(value) => {
                            debug!(key, "cache hit");
                            return CacheResult::Hit(value);
                        }
                        Err(e) => {
                            warn!(key, error = %e, "cached value failed to deserialize, treating as miss");
                            true
                        }
                    }
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.entries.write().await.remove(key);
        }
        debug!(key, "cache miss");
        CacheResult::Miss
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "value could not be serialized, skipping cache write");
                return;
            }
        };

        let entry = CacheEntry {
            value: json,
            expires_at: Utc::now() + ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Removes every entry whose key starts with the given prefix. A
    /// trailing `*` on the pattern is tolerated and stripped.
    pub async fn remove_by_pattern(&self, pattern: &str) {
        if pattern.is_empty() {
            return;
        }
        let prefix = pattern.strip_suffix('*').unwrap_or(pattern);

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        debug!(prefix, removed = before - entries.len(), "cache entries invalidated");
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
