use sea_orm::ActiveValue::Set;

use crate::errors::Result;
use crate::storage::models::{LinkRecord, ModelId};
use migration::entities::link;

/// Decode a stored identifier back into its original JSON type.
///
/// Rows written by older tooling may contain bare text instead of JSON.
/// Those decode as string identifiers.
pub fn decode_model_id(raw: &str) -> ModelId {
    serde_json::from_str(raw).unwrap_or_else(|_| ModelId::Str(raw.to_string()))
}

/// Encode an identifier for the TEXT column, keeping its JSON type.
pub fn encode_model_id(id: &ModelId) -> Result<String> {
    Ok(serde_json::to_string(id)?)
}

/// 将 LinkRecord 转换为 ActiveModel（用于插入）
pub fn record_to_active_model(record: &LinkRecord) -> Result<link::ActiveModel> {
    Ok(link::ActiveModel {
        link: Set(record.link.clone()),
        model_id: Set(encode_model_id(&record.model_id)?),
        created_at: Set(record.created_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::ActiveValue;

    #[test]
    fn test_encode_decode_string_id() {
        let id = ModelId::Str("resnet-50".to_string());
        let encoded = encode_model_id(&id).unwrap();
        assert_eq!(encoded, "\"resnet-50\"");
        assert_eq!(decode_model_id(&encoded), id);
    }

    #[test]
    fn test_encode_decode_integer_id() {
        let id = ModelId::Int(42);
        let encoded = encode_model_id(&id).unwrap();
        assert_eq!(encoded, "42");
        assert_eq!(decode_model_id(&encoded), id);
    }

    #[test]
    fn test_decode_bare_text_falls_back_to_string() {
        // 非 JSON 内容按字符串处理
        assert_eq!(
            decode_model_id("not json at all"),
            ModelId::Str("not json at all".to_string())
        );
    }

    #[test]
    fn test_decode_numeric_looking_string_stays_string() {
        assert_eq!(decode_model_id("\"42\""), ModelId::Str("42".to_string()));
    }

    #[test]
    fn test_record_to_active_model() {
        let record = LinkRecord {
            link: "Zz9qAb3x".to_string(),
            model_id: ModelId::Int(7),
            created_at: Utc::now(),
        };

        let active = record_to_active_model(&record).unwrap();

        assert!(matches!(active.link, ActiveValue::Set(_)));
        assert!(matches!(active.created_at, ActiveValue::Set(_)));
        if let ActiveValue::Set(encoded) = active.model_id {
            assert_eq!(encoded, "7");
        }
    }

    #[test]
    fn test_roundtrip_conversion() {
        let record = LinkRecord {
            link: "Qw2eRt5y".to_string(),
            model_id: ModelId::Str("llama-7b".to_string()),
            created_at: Utc::now(),
        };

        let active = record_to_active_model(&record).unwrap();
        let stored = match active.model_id {
            ActiveValue::Set(v) => v,
            _ => unreachable!(),
        };

        assert_eq!(decode_model_id(&stored), record.model_id);
    }
}
