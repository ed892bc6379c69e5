use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier supplied by the client when a link is created.
///
/// The original JSON type (number or string) is preserved through
/// storage, so resolving a link returns exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelId::Int(n) => write!(f, "{}", n),
            ModelId::Str(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub link: String,
    pub model_id: ModelId,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
