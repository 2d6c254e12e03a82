//! In-memory TTL cache for normalized upstream results.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use lingo_core::ports::{Cache, CacheError};

/// TTL applied when the caller does not pass one.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory cache using a HashMap behind an async RwLock.
///
/// Every entry carries an expiry; there is no size bound and no LRU, so an
/// entry only leaves through its TTL (lazily on `get`, or in bulk through
/// `purge_expired`). Data is lost on process restart.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl InMemoryCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let store = self.store.read().await;
        let entry = store.get(key)?;

        if entry.is_expired(now) {
            drop(store);
            let mut store = self.store.write().await;
            // Re-check under the write lock: a concurrent `set` may have
            // refreshed the entry in between.
            if store.get(key).is_some_and(|e| e.is_expired(now)) {
                store.remove(key);
            }
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::Operation(format!("TTL out of range: {:?}", ttl)))?;

        let mut store = self.store.write().await;
        store.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired(now));
        before - store.len()
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}
