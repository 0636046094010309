//! Errors raised while interpreting a status payload

use thiserror::Error;

/// Result type alias for payload operations
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Everything that can be wrong with a status payload or one of its records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Value is not a JSON object
    #[error("expected a JSON object, got {0}")]
    InvalidShape(&'static str),

    /// A required key is absent
    #[error("required key \"{0}\" is missing")]
    MissingField(&'static str),

    /// A key is present but holds the wrong JSON type
    #[error("key \"{field}\" must be {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The homework list is empty
    #[error("homework list is empty")]
    EmptyResult,

    /// The status has no verdict
    #[error("undocumented homework status: {0}")]
    UnknownStatus(String),
}

/// Short name of a JSON value's type, used in error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
