//! JSON error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Error body: a short `error` string, plus operator-facing `help` for
/// configuration problems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    // Common error constructors
    pub fn rate_limited() -> Self {
        Self::new("Rate limit exceeded")
    }

    pub fn upstream_error() -> Self {
        Self::new("Upstream error")
    }

    pub fn upstream_timeout() -> Self {
        Self::new("Upstream request timed out")
    }

    pub fn unexpected_shape() -> Self {
        Self::new("Unexpected upstream shape")
    }

    pub fn internal_error() -> Self {
        Self::new("Server error")
    }
}
