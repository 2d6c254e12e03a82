use serde::{Deserialize, Serialize};

/// Normalized language detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub language: String,
    pub confidence: Option<f64>,
}

/// One entry of the supported-languages list.
///
/// `name` is localized into the requested target language when the provider
/// supplies it; some provider variants return bare codes only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Language {
    pub fn code(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            name: None,
        }
    }

    pub fn named(language: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            name: Some(name.into()),
        }
    }
}
