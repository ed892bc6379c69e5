//! Request payload validation for the link API.

use serde_json::Value;

use crate::errors::{ModelinkError, Result};
use crate::storage::ModelId;

/// Validate a POST body and extract the identifier.
///
/// A body that is missing, unparsable, not an object, or without a
/// `modelID` key is a missing-field rejection. A `modelID` of the wrong
/// JSON type is a validation rejection.
pub fn validate_link_payload(body: &[u8]) -> Result<ModelId> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ModelinkError::missing_field("No modelID provided"))?;

    let raw = value
        .as_object()
        .and_then(|obj| obj.get("modelID"))
        .ok_or_else(|| ModelinkError::missing_field("No modelID provided"))?;

    serde_json::from_value::<ModelId>(raw.clone()).map_err(|_| {
        ModelinkError::validation(format!(
            "modelID: expected a string or an integer, got {}",
            json_type_name(raw)
        ))
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_missing_field() {
        let err = validate_link_payload(b"").unwrap_err();
        assert!(matches!(err, ModelinkError::MissingField(_)));
        assert_eq!(err.message(), "No modelID provided");
    }

    #[test]
    fn test_non_object_body_is_missing_field() {
        for body in [&b"[1, 2]"[..], b"\"text\"", b"42", b"not json"] {
            let err = validate_link_payload(body).unwrap_err();
            assert!(matches!(err, ModelinkError::MissingField(_)));
        }
    }

    #[test]
    fn test_object_without_model_id_is_missing_field() {
        let err = validate_link_payload(br#"{"model": "resnet"}"#).unwrap_err();
        assert!(matches!(err, ModelinkError::MissingField(_)));
    }

    #[test]
    fn test_string_model_id() {
        let id = validate_link_payload(br#"{"modelID": "resnet-50"}"#).unwrap();
        assert_eq!(id, ModelId::Str("resnet-50".to_string()));
    }

    #[test]
    fn test_integer_model_id() {
        let id = validate_link_payload(br#"{"modelID": 42}"#).unwrap();
        assert_eq!(id, ModelId::Int(42));
    }

    #[test]
    fn test_wrong_type_model_id_is_validation_error() {
        for body in [
            &br#"{"modelID": null}"#[..],
            br#"{"modelID": true}"#,
            br#"{"modelID": 1.5}"#,
            br#"{"modelID": [1]}"#,
            br#"{"modelID": {"id": 1}}"#,
        ] {
            let err = validate_link_payload(body).unwrap_err();
            assert!(matches!(err, ModelinkError::Validation(_)), "body: {:?}", body);
        }
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let id = validate_link_payload(br#"{"modelID": "m1", "other": 7}"#).unwrap();
        assert_eq!(id, ModelId::Str("m1".to_string()));
    }
}
