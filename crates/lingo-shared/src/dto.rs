//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are all optional at the wire level; the server decides
//! what is missing and answers 400 itself.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// POST /api/translate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cached: bool,
}

/// POST /api/detect
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub language: String,
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cached: bool,
}

/// GET /api/languages query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesParams {
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cached: bool,
}

/// POST /api/transliterate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransliterateRequest {
    pub text: Option<String>,
    pub lang: Option<String>,
}

/// `transliterated` is null when the language has no romanization table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterateResponse {
    pub transliterated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cached_flag_only_serialized_on_hit() {
        let fresh = TranslateResponse {
            translated: "hola".to_string(),
            cached: false,
        };
        assert_eq!(serde_json::to_value(&fresh).unwrap(), json!({"translated": "hola"}));

        let hit = TranslateResponse {
            translated: "hola".to_string(),
            cached: true,
        };
        assert_eq!(
            serde_json::to_value(&hit).unwrap(),
            json!({"translated": "hola", "cached": true})
        );
    }

    #[test]
    fn test_empty_body_deserializes() {
        let req: TranslateRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.text.is_none() && req.target.is_none() && req.source.is_none());
    }

    #[test]
    fn test_detect_response_keeps_null_confidence() {
        let body = DetectResponse {
            language: "es".to_string(),
            confidence: None,
            cached: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"language": "es", "confidence": null})
        );
    }
}
