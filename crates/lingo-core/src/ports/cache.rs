use async_trait::async_trait;
use std::time::Duration;

/// Cache trait - abstraction over the response cache.
///
/// Values are opaque strings; callers serialize whatever they store.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a live value. Expired entries are evicted and reported absent.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous entry. `None` uses the
    /// backend's default TTL.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Drop every entry whose TTL has passed. Returns how many were removed.
    async fn purge_expired(&self) -> usize;

    /// Number of stored entries, expired-but-unswept ones included.
    async fn len(&self) -> usize;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
