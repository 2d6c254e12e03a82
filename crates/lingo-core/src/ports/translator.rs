//! Upstream translation provider port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{Detection, DetectQuery, Language, LanguagesQuery, TranslateQuery};

/// The external translation service the relay delegates to.
///
/// Implementations make exactly one attempt per call; retrying is left to
/// the client of the relay.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, query: &TranslateQuery) -> Result<String, UpstreamError>;

    async fn detect(&self, query: &DetectQuery) -> Result<Detection, UpstreamError>;

    async fn languages(&self, query: &LanguagesQuery) -> Result<Vec<Language>, UpstreamError>;
}

/// Upstream call failures.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum UpstreamError {
    /// No API key configured; no request was attempted.
    #[error("Upstream credential is not configured")]
    MissingCredential,

    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Upstream responded with status {0}")]
    Status(u16),

    #[error("Unexpected upstream response shape")]
    UnexpectedShape,

    #[error("Upstream transport failure: {0}")]
    Transport(String),
}

impl UpstreamError {
    /// Upstream HTTP status, when the provider answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UpstreamError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
