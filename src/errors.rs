use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum ModelinkError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    MissingField(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl ModelinkError {
    /// Stable error code, one per variant
    pub fn code(&self) -> &'static str {
        match self {
            ModelinkError::DatabaseConfig(_) => "E001",
            ModelinkError::DatabaseConnection(_) => "E002",
            ModelinkError::DatabaseOperation(_) => "E003",
            ModelinkError::MissingField(_) => "E004",
            ModelinkError::Validation(_) => "E005",
            ModelinkError::NotFound(_) => "E006",
            ModelinkError::Serialization(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ModelinkError::DatabaseConfig(_) => "Database Configuration Error",
            ModelinkError::DatabaseConnection(_) => "Database Connection Error",
            ModelinkError::DatabaseOperation(_) => "Database Operation Error",
            ModelinkError::MissingField(_) => "Missing Field",
            ModelinkError::Validation(_) => "Validation Error",
            ModelinkError::NotFound(_) => "Resource Not Found",
            ModelinkError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ModelinkError::DatabaseConfig(msg) => msg,
            ModelinkError::DatabaseConnection(msg) => msg,
            ModelinkError::DatabaseOperation(msg) => msg,
            ModelinkError::MissingField(msg) => msg,
            ModelinkError::Validation(msg) => msg,
            ModelinkError::NotFound(msg) => msg,
            ModelinkError::Serialization(msg) => msg,
        }
    }

    /// HTTP status used at the handler boundary.
    ///
    /// Validation maps to 402, not 422: existing clients depend on the
    /// 402 they have always been given.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ModelinkError::MissingField(_) => StatusCode::BAD_REQUEST,
            ModelinkError::Validation(_) => StatusCode::PAYMENT_REQUIRED,
            ModelinkError::NotFound(_) => StatusCode::NOT_FOUND,
            ModelinkError::DatabaseConfig(_)
            | ModelinkError::DatabaseConnection(_)
            | ModelinkError::DatabaseOperation(_)
            | ModelinkError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ModelinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for ModelinkError {}

// 便捷的构造函数
impl ModelinkError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ModelinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ModelinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ModelinkError::DatabaseOperation(msg.into())
    }

    pub fn missing_field<T: Into<String>>(msg: T) -> Self {
        ModelinkError::MissingField(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ModelinkError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ModelinkError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ModelinkError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for ModelinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        ModelinkError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ModelinkError {
    fn from(err: serde_json::Error) -> Self {
        ModelinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelinkError>;
