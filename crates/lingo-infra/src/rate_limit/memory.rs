//! In-memory sliding-window rate limiter.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tokio::time::Instant;

use lingo_core::ports::{RateLimitResult, RateLimiter};

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window, per client key.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 60,
            window: Duration::from_secs(60),
        }
    }
}

/// Per-key sliding-window limiter.
///
/// Each key keeps the timestamps of its requests inside the trailing window.
/// A check records the request first and only then compares the count with
/// the limit, so a rejected request still occupies a slot until it ages out.
///
/// Note: Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
    config: RateLimitConfig,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Pop timestamps that are no longer strictly inside the window.
    fn expire(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(&oldest) = timestamps.front() {
            if now.saturating_duration_since(oldest) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> RateLimitResult {
        let now = Instant::now();
        let window = self.config.window;
        let limit = self.config.max_requests;

        let (count, oldest) = {
            let mut windows = self.windows.lock().await;
            let timestamps = windows.entry(key.to_string()).or_default();
            Self::expire(timestamps, now, window);
            timestamps.push_back(now);
            (timestamps.len(), timestamps.front().copied().unwrap_or(now))
        };

        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let reset_after = oldest
            .checked_add(window)
            .map_or(window, |reset| reset.saturating_duration_since(now));
        // Windows beyond what chrono can represent pin the reset to the far future.
        let reset_at = chrono::Duration::from_std(reset_after)
            .ok()
            .and_then(|delta| Utc::now().checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let allowed = count <= limit;
        if !allowed {
            tracing::debug!(key = %key, count, limit, "Rate limit exceeded");
        }

        RateLimitResult {
            allowed,
            remaining: limit.saturating_sub(count),
            limit,
            reset_after,
            reset_at,
        }
    }

    async fn prune(&self) -> usize {
        let now = Instant::now();
        let window = self.config.window;
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        windows.retain(|_, timestamps| {
            Self::expire(timestamps, now, window);
            !timestamps.is_empty()
        });
        before - windows.len()
    }

    async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> InMemoryRateLimiter {
        InMemoryRateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_secs(window_secs),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_limit_plus_one_is_first_rejection() {
        let limiter = limiter(60, 60);

        for i in 1..=60 {
            let result = limiter.check("10.0.0.1").await;
            assert!(result.allowed, "request {i} should be allowed");
            assert_eq!(result.remaining, 60 - i);
            assert_eq!(result.limit, 60);
        }

        let result = limiter.check("10.0.0.1").await;
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_never_negative() {
        let limiter = limiter(3, 60);
        for _ in 0..20 {
            let result = limiter.check("k").await;
            assert!(result.remaining <= 3);
        }
        assert_eq!(limiter.check("k").await.remaining, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_request_still_occupies_slot() {
        let limiter = limiter(2, 10);
        limiter.check("k").await;
        tokio::time::advance(Duration::from_secs(5)).await;
        limiter.check("k").await;
        assert!(!limiter.check("k").await.allowed);

        // The first request ages out, but the rejected one is still counted
        // alongside the second.
        tokio::time::advance(Duration::from_secs(5)).await;
        let result = limiter.check("k").await;
        assert!(!result.allowed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_are_independent() {
        let limiter = limiter(1, 60);
        assert!(limiter.check("a").await.allowed);
        assert!(!limiter.check("a").await.allowed);
        assert!(limiter.check("b").await.allowed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_slides() {
        let limiter = limiter(2, 10);
        assert!(limiter.check("k").await.allowed);
        assert!(limiter.check("k").await.allowed);

        tokio::time::advance(Duration::from_secs(10)).await;
        let result = limiter.check("k").await;
        assert!(result.allowed, "timestamps exactly one window old are dropped");
        assert_eq!(result.remaining, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_tracks_oldest_request() {
        let limiter = limiter(5, 60);
        let first = limiter.check("k").await;
        assert_eq!(first.reset_after, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(20)).await;
        let second = limiter.check("k").await;
        assert_eq!(second.reset_after, Duration::from_secs(40));
        assert!(second.reset_at > Utc::now());
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_window_resets_in_far_future() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_secs(u64::MAX),
        });

        let result = limiter.check("k").await;
        assert!(result.allowed);
        assert!(result.reset_at > Utc::now() + chrono::Duration::days(365 * 100));
        assert!(!limiter.check("k").await.allowed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prune_drops_idle_keys() {
        let limiter = limiter(5, 10);
        limiter.check("idle").await;
        tokio::time::advance(Duration::from_secs(6)).await;
        limiter.check("active").await;
        assert_eq!(limiter.tracked_keys().await, 2);

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(limiter.prune().await, 1);
        assert_eq!(limiter.tracked_keys().await, 1);

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(limiter.prune().await, 1);
        assert_eq!(limiter.tracked_keys().await, 0);
    }
}
