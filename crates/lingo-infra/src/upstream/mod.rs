//! Upstream translation provider client and response normalization.

mod client;
pub mod shapes;

pub use client::{HttpTranslationProvider, ProviderConfig};
