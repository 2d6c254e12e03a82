//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use lingo_core::ports::{Cache, RateLimiter, TranslationProvider, UpstreamError};
use lingo_infra::{HttpTranslationProvider, InMemoryCache, InMemoryRateLimiter, RateLimitConfig};

use crate::config::AppConfig;

/// Shared application state.
///
/// The cache and rate-limit stores are created once at startup and live for
/// the whole process; every worker holds the same `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn Cache>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub provider: Arc<dyn TranslationProvider>,
    pub rate_limit: RateLimitConfig,
    pub trust_proxy: bool,
    pub started_at: Instant,
}

impl AppState {
    /// Build the application state with the in-memory stores and the HTTP
    /// provider client.
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new(config.cache_ttl));
        let rate_limiter: Arc<dyn RateLimiter> =
            Arc::new(InMemoryRateLimiter::new(config.rate_limit.clone()));
        let client = HttpTranslationProvider::new(config.provider.clone())?;
        if !client.has_credential() {
            tracing::warn!(
                "RAPIDAPI_KEY is not set. Translation, detection and language requests \
                 will answer 503 until it is configured."
            );
        }
        let provider: Arc<dyn TranslationProvider> = Arc::new(client);

        tracing::info!(
            rate_limit_max = config.rate_limit.max_requests,
            rate_limit_window_ms = config.rate_limit.window.as_millis() as u64,
            cache_ttl_ms = config.cache_ttl.as_millis() as u64,
            upstream_host = %config.provider.host,
            "Application state initialized"
        );

        Ok(Self::from_parts(cache, rate_limiter, provider, config.rate_limit.clone())
            .with_trust_proxy(config.trust_proxy))
    }

    /// Assemble state from explicit parts, e.g. isolated stores in tests.
    pub fn from_parts(
        cache: Arc<dyn Cache>,
        rate_limiter: Arc<dyn RateLimiter>,
        provider: Arc<dyn TranslationProvider>,
        rate_limit: RateLimitConfig,
    ) -> Self {
        Self {
            cache,
            rate_limiter,
            provider,
            rate_limit,
            trust_proxy: false,
            started_at: Instant::now(),
        }
    }

    pub fn with_trust_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }
}
