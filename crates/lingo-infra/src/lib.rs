//! # Lingo Infrastructure
//!
//! Concrete implementations of the ports defined in `lingo-core`:
//! the in-memory response cache, the sliding-window rate limiter and the
//! HTTP client for the upstream translation provider.
//!
//! Both stores are process-local. Running several relay instances gives each
//! its own independent cache and quota.

pub mod cache;
pub mod rate_limit;
pub mod upstream;

pub use cache::InMemoryCache;
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
pub use upstream::{HttpTranslationProvider, ProviderConfig};
