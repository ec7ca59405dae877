//! Effective-content computation for placed sections.
//!
//! A placed section's content is assembled from up to three JSON objects:
//! template defaults, the chosen variant's overrides, and the instance's own
//! customizations. The merge is shallow and right-biased (object-spread
//! semantics): later keys override earlier ones wholesale, nested objects and
//! arrays are replaced, never merged element-wise.

use serde_json::{Map, Value};

use crate::error::{AppError, FieldError};

/// Compute the effective content for a placed section.
///
/// Right-biased shallow merge of `default` ⊕ `variant` ⊕ `custom`. Keys
/// missing from a later source never delete keys from an earlier one.
/// Non-object inputs contribute nothing.
///
/// Pure: no I/O, no mutation of the inputs.
#[must_use]
pub fn effective_content(
    default: &Value,
    variant: Option<&Value>,
    custom: Option<&Value>,
) -> Value {
    let mut merged = Map::new();

    for source in [Some(default), variant, custom].into_iter().flatten() {
        if let Value::Object(map) = source {
            for (key, value) in map {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(merged)
}

/// Parse a content field submitted to the admin mutation endpoints.
///
/// Multipart form values always arrive as text; the payload may additionally
/// be double-encoded by clients that `JSON.stringify` an already-serialized
/// string. One level of that is unwrapped.
///
/// # Errors
///
/// Returns a validation error naming the field ("Invalid JSON in ...") if
/// the payload does not parse. Shape beyond "parses as JSON" is not checked.
pub fn parse_content_field(field: &str, raw: &str) -> Result<Value, AppError> {
    let invalid = || {
        AppError::Validation(vec![FieldError::new(
            field,
            format!("Invalid JSON in {field}"),
        )])
    };

    let value: Value = serde_json::from_str(raw).map_err(|_| invalid())?;

    if let Value::String(inner) = &value {
        return serde_json::from_str(inner).map_err(|_| invalid());
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_default_only_is_identity() {
        let default = json!({"title": "Hello", "items": [1, 2, 3]});
        assert_eq!(effective_content(&default, None, None), default);
    }

    #[test]
    fn test_merge_precedence_custom_wins() {
        let default = json!({"title": "Default", "subtitle": "Sub"});
        let variant = json!({"title": "Variant"});
        let custom = json!({"title": "Custom"});

        let merged = effective_content(&default, Some(&variant), Some(&custom));
        assert_eq!(merged["title"], "Custom");
        assert_eq!(merged["subtitle"], "Sub");
    }

    #[test]
    fn test_merge_precedence_variant_wins_without_custom() {
        let default = json!({"title": "Default"});
        let variant = json!({"title": "Variant"});

        let merged = effective_content(&default, Some(&variant), None);
        assert_eq!(merged["title"], "Variant");
    }

    #[test]
    fn test_merge_is_shallow() {
        let default = json!({"items": [1, 2, 3]});
        let custom = json!({"items": [9]});

        let merged = effective_content(&default, None, Some(&custom));
        assert_eq!(merged["items"], json!([9]));
    }

    #[test]
    fn test_merge_does_not_deep_merge_objects() {
        let default = json!({"cta": {"label": "Go", "url": "/a"}});
        let custom = json!({"cta": {"label": "Now"}});

        let merged = effective_content(&default, None, Some(&custom));
        // The whole nested object is replaced; "url" is gone.
        assert_eq!(merged["cta"], json!({"label": "Now"}));
    }

    #[test]
    fn test_merge_missing_keys_never_delete() {
        let default = json!({"title": "Keep", "body": "Stays"});
        let custom = json!({"extra": true});

        let merged = effective_content(&default, None, Some(&custom));
        assert_eq!(merged["title"], "Keep");
        assert_eq!(merged["body"], "Stays");
        assert_eq!(merged["extra"], true);
    }

    #[test]
    fn test_merge_non_object_sources_contribute_nothing() {
        let default = json!({"title": "Hello"});
        let custom = json!("just a string");

        let merged = effective_content(&default, None, Some(&custom));
        assert_eq!(merged, json!({"title": "Hello"}));
    }

    #[test]
    fn test_parse_content_field_object() {
        let parsed = parse_content_field("default_data", r#"{"title": "Hi"}"#).unwrap();
        assert_eq!(parsed["title"], "Hi");
    }

    #[test]
    fn test_parse_content_field_double_encoded() {
        let parsed = parse_content_field("default_data", r#""{\"title\": \"Hi\"}""#).unwrap();
        assert_eq!(parsed["title"], "Hi");
    }

    #[test]
    fn test_parse_content_field_invalid() {
        let err = parse_content_field("variant_data", "{not json").unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.first().unwrap().message.contains("variant_data"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
