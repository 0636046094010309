//! Status response validation
//!
//! Checks the shape of a decoded status payload and picks out the record
//! the poller should report on.

use serde_json::Value;

use crate::error::{PayloadError, Result, json_kind};

/// Key holding the homework list
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side timestamp of the response
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Validates a status payload and returns its most recent homework record
///
/// The review service returns homework most-recent-first, so the record at
/// index 0 is the latest change. Order is not re-checked here.
///
/// # Errors
/// * `InvalidShape` - payload is not an object
/// * `MissingField("homeworks")` - the list is absent
/// * `WrongType` - the list is not an array
/// * `EmptyResult` - nothing changed since the requested timestamp
pub fn check_response(payload: &Value) -> Result<&Value> {
    let fields = payload
        .as_object()
        .ok_or_else(|| PayloadError::InvalidShape(json_kind(payload)))?;

    let homeworks = fields
        .get(HOMEWORKS_KEY)
        .ok_or(PayloadError::MissingField(HOMEWORKS_KEY))?;

    let list = homeworks.as_array().ok_or_else(|| PayloadError::WrongType {
        field: HOMEWORKS_KEY,
        expected: "array",
        found: json_kind(homeworks),
    })?;

    list.first().ok_or(PayloadError::EmptyResult)
}

/// Server timestamp reported alongside the homework list, if any
///
/// Anything other than an integer is treated as absent.
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_returns_first_record() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "newest", "status": "approved"},
                {"homework_name": "older", "status": "rejected"},
                {"homework_name": "oldest", "status": "reviewing"},
            ],
            "current_date": 1000,
        });

        let record = check_response(&payload).unwrap();
        assert_eq!(record["homework_name"], "newest");
    }

    #[test]
    fn test_returns_first_record_for_any_length() {
        for len in 1..=5 {
            let homeworks: Vec<Value> = (0..len)
                .map(|i| json!({"homework_name": format!("hw{}", i), "status": "approved"}))
                .collect();
            let payload = json!({ "homeworks": homeworks });

            let record = check_response(&payload).unwrap();
            assert_eq!(record, &payload["homeworks"][0]);
        }
    }

    #[test]
    fn test_rejects_non_object_payload() {
        assert_eq!(
            check_response(&json!([1, 2, 3])),
            Err(PayloadError::InvalidShape("array"))
        );
        assert_eq!(
            check_response(&json!("homeworks")),
            Err(PayloadError::InvalidShape("string"))
        );
        assert_eq!(
            check_response(&Value::Null),
            Err(PayloadError::InvalidShape("null"))
        );
    }

    #[test]
    fn test_missing_homeworks_key() {
        let payload = json!({"current_date": 1000});
        assert_eq!(
            check_response(&payload),
            Err(PayloadError::MissingField("homeworks"))
        );
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let payload = json!({"homeworks": {"homework_name": "hw1"}});
        assert_eq!(
            check_response(&payload),
            Err(PayloadError::WrongType {
                field: "homeworks",
                expected: "array",
                found: "object",
            })
        );
    }

    #[test]
    fn test_empty_homeworks() {
        let payload = json!({"homeworks": [], "current_date": 1000});
        assert_eq!(check_response(&payload), Err(PayloadError::EmptyResult));
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({"current_date": 1000})), Some(1000));
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(current_date(&json!({"current_date": "1000"})), None);
        assert_eq!(current_date(&json!([1000])), None);
    }
}
