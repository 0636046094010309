//! Status translation
//!
//! Turns a homework record into the notification text sent to the chat.

use serde_json::Value;

use crate::domain::HomeworkStatus;
use crate::error::{PayloadError, Result, json_kind};

pub const HOMEWORK_NAME_KEY: &str = "homework_name";
pub const STATUS_KEY: &str = "status";

/// Builds the notification for a homework record
///
/// Output has the form
/// `Изменился статус проверки работы "<name>". <verdict>`.
///
/// # Errors
/// * `InvalidShape` - record is not an object
/// * `MissingField` - `homework_name` or `status` is absent
/// * `WrongType` - either field is not a string
/// * `UnknownStatus` - status code has no verdict
pub fn parse_status(record: &Value) -> Result<String> {
    let fields = record
        .as_object()
        .ok_or_else(|| PayloadError::InvalidShape(json_kind(record)))?;

    let name = string_field(fields, HOMEWORK_NAME_KEY)?;
    let status: HomeworkStatus = string_field(fields, STATUS_KEY)?.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn string_field<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str> {
    let value = fields.get(key).ok_or(PayloadError::MissingField(key))?;
    value.as_str().ok_or_else(|| PayloadError::WrongType {
        field: key,
        expected: "string",
        found: json_kind(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_message() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_message_contains_name_and_verdict() {
        for status in HomeworkStatus::ALL {
            let record = json!({
                "homework_name": "username__hw_python_oop.zip",
                "status": status.as_str(),
            });

            let message = parse_status(&record).unwrap();
            assert!(message.contains("\"username__hw_python_oop.zip\""));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_translation_is_idempotent() {
        let record = json!({"homework_name": "hw2", "status": "rejected", "id": 7});
        assert_eq!(parse_status(&record), parse_status(&record));
    }

    #[test]
    fn test_unknown_status() {
        let record = json!({"homework_name": "hw2", "status": "unknown_code"});
        assert_eq!(
            parse_status(&record),
            Err(PayloadError::UnknownStatus("unknown_code".to_string()))
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            parse_status(&json!({"status": "approved"})),
            Err(PayloadError::MissingField("homework_name"))
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1"})),
            Err(PayloadError::MissingField("status"))
        );
    }

    #[test]
    fn test_non_string_fields() {
        assert_eq!(
            parse_status(&json!({"homework_name": 42, "status": "approved"})),
            Err(PayloadError::WrongType {
                field: "homework_name",
                expected: "string",
                found: "number",
            })
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": null})),
            Err(PayloadError::WrongType {
                field: "status",
                expected: "string",
                found: "null",
            })
        );
    }

    #[test]
    fn test_record_not_an_object() {
        assert_eq!(
            parse_status(&json!("hw1")),
            Err(PayloadError::InvalidShape("string"))
        );
    }
}
