//! Known response layouts of the upstream provider.
//!
//! The provider's payload is not stable across API variants, so each result
//! kind has an ordered table of (JSON pointer, extractor) pairs. The first
//! entry whose pointer resolves and whose extractor accepts the value wins.
//! Supporting a new layout means adding a row, not a branch.

use serde_json::Value;

use lingo_core::domain::{Detection, Language};

/// One known location of a result inside the payload.
pub struct Shape<T> {
    /// RFC 6901 pointer; the empty string is the payload root.
    pub pointer: &'static str,
    pub extract: fn(&Value) -> Option<T>,
}

impl<T> Shape<T> {
    const fn at(pointer: &'static str, extract: fn(&Value) -> Option<T>) -> Self {
        Self { pointer, extract }
    }
}

pub const TRANSLATION_SHAPES: &[Shape<String>] = &[
    Shape::at("/data/translations/0/translatedText", non_empty_string),
    Shape::at("/data/translated_text", non_empty_string),
    Shape::at("/translated_text", non_empty_string),
    Shape::at("/translation", non_empty_string),
    Shape::at("/result", non_empty_string),
    Shape::at("/text", non_empty_string),
    Shape::at("/output", non_empty_string),
];

pub const DETECTION_SHAPES: &[Shape<Detection>] = &[
    Shape::at("/data/detections/0/0", detection_object),
    Shape::at("/data/detections/0", detection_object),
    Shape::at("/data/detection", detection_object),
    Shape::at("", detection_object),
];

pub const LANGUAGE_LIST_SHAPES: &[Shape<Vec<Language>>] = &[
    Shape::at("/data/languages", language_list),
    Shape::at("/languages", language_list),
    Shape::at("", language_list),
];

/// Try each shape in order against `payload`.
pub fn probe<T>(payload: &Value, shapes: &[Shape<T>]) -> Option<T> {
    shapes.iter().find_map(|shape| {
        payload
            .pointer(shape.pointer)
            .and_then(|value| (shape.extract)(value))
    })
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn detection_object(value: &Value) -> Option<Detection> {
    let language = value.get("language").and_then(non_empty_string)?;
    let confidence = value.get("confidence").and_then(Value::as_f64);
    Some(Detection {
        language,
        confidence,
    })
}

fn language_entry(value: &Value) -> Option<Language> {
    match value {
        Value::String(code) if !code.is_empty() => Some(Language::code(code.clone())),
        Value::Object(_) => {
            let code = value.get("language").and_then(non_empty_string)?;
            let name = value.get("name").and_then(non_empty_string);
            Some(Language { language: code, name })
        }
        _ => None,
    }
}

/// An array of language entries. Entries that are neither a code string nor
/// an object with a `language` field are skipped; an array with no usable
/// entry at all only matches when it is genuinely empty.
fn language_list(value: &Value) -> Option<Vec<Language>> {
    let items = value.as_array()?;
    let languages: Vec<Language> = items.iter().filter_map(language_entry).collect();
    if languages.is_empty() && !items.is_empty() {
        return None;
    }
    Some(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_documented_translation_shape() {
        let payload = json!({"data": {"translations": [{"translatedText": "hola"}]}});
        assert_eq!(probe(&payload, TRANSLATION_SHAPES), Some("hola".to_string()));
    }

    #[test]
    fn test_translation_fallback_shapes_in_order() {
        let payload = json!({"data": {"translated_text": "bonjour"}, "translation": "ignored"});
        assert_eq!(probe(&payload, TRANSLATION_SHAPES), Some("bonjour".to_string()));

        let payload = json!({"translation": "ciao"});
        assert_eq!(probe(&payload, TRANSLATION_SHAPES), Some("ciao".to_string()));

        let payload = json!({"output": "hallo"});
        assert_eq!(probe(&payload, TRANSLATION_SHAPES), Some("hallo".to_string()));
    }

    #[test]
    fn test_empty_or_non_string_translation_does_not_match() {
        let payload = json!({
            "data": {"translations": [{"translatedText": ""}]},
            "translation": 42
        });
        assert_eq!(probe(&payload, TRANSLATION_SHAPES), None);
        assert_eq!(probe(&json!({}), TRANSLATION_SHAPES), None);
    }

    #[test]
    fn test_nested_detection_shape() {
        let payload = json!({"data": {"detections": [[{"language": "es", "confidence": 0.98}]]}});
        let detection = probe(&payload, DETECTION_SHAPES).unwrap();
        assert_eq!(detection.language, "es");
        assert_eq!(detection.confidence, Some(0.98));
    }

    #[test]
    fn test_flat_detection_shape_without_confidence() {
        let payload = json!({"data": {"detections": [{"language": "fr"}]}});
        let detection = probe(&payload, DETECTION_SHAPES).unwrap();
        assert_eq!(detection.language, "fr");
        assert_eq!(detection.confidence, None);
    }

    #[test]
    fn test_detection_without_language_is_unexpected() {
        let payload = json!({"data": {"detections": [[{"confidence": 1.0}]]}});
        assert!(probe(&payload, DETECTION_SHAPES).is_none());
    }

    #[test]
    fn test_language_list_shapes() {
        let payload = json!({"data": {"languages": [
            {"language": "af", "name": "Afrikaans"},
            {"language": "sq"}
        ]}});
        assert_eq!(
            probe(&payload, LANGUAGE_LIST_SHAPES).unwrap(),
            vec![Language::named("af", "Afrikaans"), Language::code("sq")]
        );

        let payload = json!(["en", "es"]);
        assert_eq!(
            probe(&payload, LANGUAGE_LIST_SHAPES).unwrap(),
            vec![Language::code("en"), Language::code("es")]
        );
    }

    #[test]
    fn test_language_list_rejects_garbage_arrays() {
        assert!(probe(&json!({"languages": [1, 2, 3]}), LANGUAGE_LIST_SHAPES).is_none());
        assert!(probe(&json!({"data": {}}), LANGUAGE_LIST_SHAPES).is_none());
        assert_eq!(
            probe(&json!({"data": {"languages": []}}), LANGUAGE_LIST_SHAPES),
            Some(vec![])
        );
    }
}
