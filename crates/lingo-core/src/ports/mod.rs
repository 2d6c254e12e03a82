//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod rate_limit;
mod translator;

pub use cache::{Cache, CacheError};
pub use rate_limit::{RateLimitResult, RateLimiter};
pub use translator::{TranslationProvider, UpstreamError};
