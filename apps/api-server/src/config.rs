//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use lingo_infra::{ProviderConfig, RateLimitConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Key clients by forwarded address instead of the socket peer.
    pub trust_proxy: bool,
    pub provider: ProviderConfig,
    pub rate_limit: RateLimitConfig,
    pub cache_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Numeric settings that are missing, unparsable or zero fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let millis = |key: &str, default: u64| {
            Duration::from_millis(positive(lookup(key)).unwrap_or(default))
        };

        let defaults = ProviderConfig::default();
        let provider = ProviderConfig {
            api_key: lookup("RAPIDAPI_KEY").filter(|v| !v.is_empty()),
            host: text("RAPIDAPI_HOST", &defaults.host),
            translate_path: text("RAPIDAPI_TRANSLATE_PATH", &defaults.translate_path),
            detect_path: text("RAPIDAPI_DETECT_PATH", &defaults.detect_path),
            languages_path: text("RAPIDAPI_LANGUAGES_PATH", &defaults.languages_path),
            timeout: millis("SERVER_FETCH_TIMEOUT_MS", 15_000),
        };

        let rate_limit = RateLimitConfig {
            max_requests: positive(lookup("RATE_LIMIT_MAX"))
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(60),
            window: millis("RATE_LIMIT_WINDOW_MS", 60_000),
        };

        Self {
            host: text("HOST", "0.0.0.0"),
            port: positive(lookup("PORT"))
                .and_then(|p| u16::try_from(p).ok())
                .unwrap_or(3000),
            trust_proxy: lookup("TRUST_PROXY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            provider,
            rate_limit,
            cache_ttl: millis("CACHE_TTL_MS", 60 * 60 * 1000),
        }
    }

    /// Cadence of the expiry sweep: the rate-limit window, kept within
    /// one second and one minute.
    pub fn sweep_interval(&self) -> Duration {
        self.rate_limit
            .window
            .clamp(Duration::from_secs(1), Duration::from_secs(60))
    }
}

fn positive(value: Option<String>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
}
