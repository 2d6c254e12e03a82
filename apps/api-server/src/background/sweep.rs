//! Periodic eviction of expired cache entries and idle rate-limit keys.
//!
//! Lazy expiry alone never frees keys that are not read again; this pass
//! bounds memory for abandoned clients and one-off cache keys.

use std::time::Duration;

use lingo_core::ports::{Cache, RateLimiter};
use tokio_cron_scheduler::JobSchedulerError;

use super::Scheduler;
use crate::state::AppState;

/// What one sweep removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub cache_entries: usize,
    pub rate_limit_keys: usize,
}

/// One pass over both stores.
pub async fn sweep(cache: &dyn Cache, rate_limiter: &dyn RateLimiter) -> SweepReport {
    let report = SweepReport {
        cache_entries: cache.purge_expired().await,
        rate_limit_keys: rate_limiter.prune().await,
    };

    tracing::debug!(
        cache_entries = report.cache_entries,
        rate_limit_keys = report.rate_limit_keys,
        "Expiry sweep finished"
    );
    report
}

/// Register the sweep on `scheduler` at the given cadence.
pub async fn schedule(
    scheduler: &Scheduler,
    state: AppState,
    interval: Duration,
) -> Result<uuid::Uuid, JobSchedulerError> {
    scheduler
        .add_repeated("expiry-sweep", interval, move || {
            let state = state.clone();
            async move {
                sweep(state.cache.as_ref(), state.rate_limiter.as_ref()).await;
            }
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_infra::{InMemoryCache, InMemoryRateLimiter, RateLimitConfig};

    #[tokio::test(start_paused = true)]
    async fn test_sweep_clears_both_stores() {
        let cache = InMemoryCache::new(Duration::from_secs(30));
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 10,
            window: Duration::from_secs(10),
        });

        cache.set("translate:en:es:hello", "\"hola\"", None).await.unwrap();
        limiter.check("10.0.0.1").await;
        limiter.check("10.0.0.2").await;

        let report = sweep(&cache, &limiter).await;
        assert_eq!(report, SweepReport { cache_entries: 0, rate_limit_keys: 0 });

        tokio::time::advance(Duration::from_secs(31)).await;
        let report = sweep(&cache, &limiter).await;
        assert_eq!(report, SweepReport { cache_entries: 1, rate_limit_keys: 2 });
        assert_eq!(cache.len().await, 0);
        assert_eq!(limiter.tracked_keys().await, 0);
    }
}
