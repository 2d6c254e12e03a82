//! Rate limiting port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Rate limiter trait - per-client admission with quota reporting.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Record a request for `key` and report whether it is admitted.
    async fn check(&self, key: &str) -> RateLimitResult;

    /// Forget clients whose requests have all aged out of the window.
    /// Returns how many keys were removed.
    async fn prune(&self) -> usize;

    /// Number of clients currently tracked.
    async fn tracked_keys(&self) -> usize;
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub limit: u32,
    /// Time until the oldest request in the window stops counting.
    pub reset_after: Duration,
    /// Wall-clock form of `reset_after`.
    pub reset_at: DateTime<Utc>,
}
