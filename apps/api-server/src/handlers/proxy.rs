//! Steps shared by the proxied endpoints: quota check, cache lookup and
//! store, and the response metadata headers.

use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::header::{HeaderName, HeaderValue};
use chrono::SecondsFormat;
use serde::Serialize;
use serde::de::DeserializeOwned;

use lingo_core::domain::CacheKey;
use lingo_core::ports::{Cache, RateLimitResult};

use crate::middleware::client_key::ClientKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";
pub const CACHE_STATUS: &str = "x-cache";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    fn header_value(self) -> HeaderValue {
        match self {
            CacheStatus::Hit => HeaderValue::from_static("HIT"),
            CacheStatus::Miss => HeaderValue::from_static("MISS"),
        }
    }
}

/// Response metadata collected while a proxied request runs.
///
/// Created by the rate-limit step, so quota headers are present on every
/// response from that point on, errors included. The cache header is only
/// added once a lookup has happened.
pub struct ProxyReply {
    quota: RateLimitResult,
    cache: Option<CacheStatus>,
}

impl ProxyReply {
    /// Record the request against the caller's quota.
    pub async fn check(state: &AppState, client: &ClientKey) -> Self {
        let quota = state.rate_limiter.check(client.as_str()).await;
        if !quota.allowed {
            tracing::warn!(
                client = %client,
                limit = quota.limit,
                retry_after_ms = quota.reset_after.as_millis() as u64,
                "Rate limit exceeded"
            );
        }
        Self { quota, cache: None }
    }

    pub fn ensure_allowed(&self) -> AppResult<()> {
        if self.quota.allowed {
            Ok(())
        } else {
            Err(AppError::RateLimited)
        }
    }

    /// Look `key` up and remember whether it was a hit.
    ///
    /// An entry that no longer decodes is treated as a miss.
    pub async fn lookup<T: DeserializeOwned>(
        &mut self,
        cache: &dyn Cache,
        key: &CacheKey,
    ) -> Option<T> {
        let value = cache.get(key.as_str()).await.and_then(|raw| {
            serde_json::from_str(&raw)
                .inspect_err(|e| {
                    tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry")
                })
                .ok()
        });

        let status = if value.is_some() { CacheStatus::Hit } else { CacheStatus::Miss };
        tracing::debug!(key = %key, cache = ?status, "Cache lookup");
        self.cache = Some(status);
        value
    }

    /// Attach the collected metadata to the handler's outcome.
    pub fn finish(self, outcome: AppResult<HttpResponse>) -> HttpResponse {
        let mut response = outcome.unwrap_or_else(|err| err.error_response());

        let reset = self
            .quota
            .reset_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let headers = response.headers_mut();
        headers.insert(
            HeaderName::from_static(RATE_LIMIT_LIMIT),
            HeaderValue::from(self.quota.limit),
        );
        headers.insert(
            HeaderName::from_static(RATE_LIMIT_REMAINING),
            HeaderValue::from(self.quota.remaining),
        );
        if let Ok(value) = HeaderValue::from_str(&reset) {
            headers.insert(HeaderName::from_static(RATE_LIMIT_RESET), value);
        }
        if let Some(status) = self.cache {
            headers.insert(HeaderName::from_static(CACHE_STATUS), status.header_value());
        }

        response
    }
}

/// Store a successful result. Caching is an optimization: failures here are
/// logged and dropped, never surfaced to the client.
pub async fn store<T: Serialize>(cache: &dyn Cache, key: &CacheKey, value: &T) {
    let result = match serde_json::to_string(value) {
        Ok(raw) => cache.set(key.as_str(), &raw, None).await,
        Err(e) => Err(lingo_core::ports::CacheError::Serialization(e.to_string())),
    };

    if let Err(e) = result {
        tracing::warn!(key = %key, error = %e, "Cache store failed");
    }
}
