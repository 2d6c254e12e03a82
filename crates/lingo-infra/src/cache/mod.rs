//! Cache implementations.

mod memory;

pub use memory::{DEFAULT_CACHE_TTL, InMemoryCache};
