//! Domain-level error types.

use thiserror::Error;

/// Domain errors - input that cannot be turned into an upstream operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required: {0}")]
    MissingFields(&'static str),
}
