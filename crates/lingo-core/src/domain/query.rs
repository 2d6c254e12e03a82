//! Validated inputs for the upstream operations.
//!
//! Empty strings count as missing, the same as an absent field.

use crate::error::DomainError;

/// Source language assumed when a translate request does not name one.
pub const DEFAULT_SOURCE: &str = "en";

/// Display language for the language list when none is requested.
pub const DEFAULT_LANGUAGES_TARGET: &str = "en";

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A translate request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateQuery {
    pub text: String,
    pub source: String,
    pub target: String,
}

impl TranslateQuery {
    pub fn parse(
        text: Option<String>,
        target: Option<String>,
        source: Option<String>,
    ) -> Result<Self, DomainError> {
        match (present(text), present(target)) {
            (Some(text), Some(target)) => Ok(Self {
                text,
                target,
                source: present(source).unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            }),
            _ => Err(DomainError::MissingFields("text,target")),
        }
    }
}

/// A detect request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectQuery {
    pub text: String,
}

impl DetectQuery {
    pub fn parse(text: Option<String>) -> Result<Self, DomainError> {
        present(text)
            .map(|text| Self { text })
            .ok_or(DomainError::MissingFields("text"))
    }
}

/// Language-list request. Never fails: the target falls back to English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagesQuery {
    pub target: String,
}

impl LanguagesQuery {
    pub fn parse(target: Option<String>) -> Self {
        Self {
            target: present(target).unwrap_or_else(|| DEFAULT_LANGUAGES_TARGET.to_string()),
        }
    }
}
