//! Raw request bodies and their conversion into typed inputs.
//! A `NewBug` or `BugPatch` is only ever built from a body that passed the relevant checks.

use crate::error::AppError;
use crate::model::{BugPatch, NewBug};
use crate::service::sanitize::sanitize;
use crate::service::validation::BugValidator;
use serde_json::{Map, Value};

/// Untyped JSON object as received.
pub type RawBug = Map<String, Value>;

pub fn body_to_map(value: Value) -> Result<RawBug, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// JSON truthiness: null, false, 0, and "" count as not supplied.
pub(crate) fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate, then sanitize. Rejects with every violated rule.
pub fn parse_new_bug(candidate: &RawBug) -> Result<NewBug, AppError> {
    BugValidator::validate(candidate).into_result()?;
    Ok(sanitize(candidate))
}

/// Typed partial update. Only `status` is checked against its enumeration; text fields
/// must be strings but are otherwise taken as given. Unknown keys, including `id`,
/// `createdAt` and `updatedAt`, are ignored.
pub fn parse_patch(body: &RawBug) -> Result<BugPatch, AppError> {
    let status = match body.get("status").filter(|v| is_truthy(v)) {
        None => None,
        Some(v) => Some(
            BugValidator::validate_status(v).ok_or_else(|| AppError::BadRequest("Invalid status value".into()))?,
        ),
    };
    Ok(BugPatch {
        title: optional_string(body, "title")?,
        description: optional_string(body, "description")?,
        status,
        priority: optional_string(body, "priority")?,
    })
}

fn optional_string(body: &RawBug, key: &str) -> Result<Option<String>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::BadRequest(format!("{} must be a string", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use serde_json::json;

    fn raw(v: Value) -> RawBug {
        body_to_map(v).unwrap()
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(matches!(body_to_map(json!([1, 2])), Err(AppError::BadRequest(_))));
        assert!(matches!(body_to_map(json!("text")), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn new_bug_is_validated_then_sanitized() {
        let bug = parse_new_bug(&raw(json!({"title": " Crash ", "description": " boom "}))).unwrap();
        assert_eq!(bug.title, "Crash");
        assert_eq!(bug.description, "boom");

        let err = parse_new_bug(&raw(json!({"title": "", "description": "d"}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e.len() == 1));
    }

    #[test]
    fn patch_status_must_be_known() {
        let err = parse_patch(&raw(json!({"status": "closed"}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status value");
        let err = parse_patch(&raw(json!({"status": 1}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid status value");

        let patch = parse_patch(&raw(json!({"status": "resolved"}))).unwrap();
        assert_eq!(patch.status, Some(Status::Resolved));
        let patch = parse_patch(&raw(json!({"status": ""}))).unwrap();
        assert_eq!(patch.status, None);
    }

    #[test]
    fn patch_text_is_not_length_checked() {
        let patch = parse_patch(&raw(json!({"title": "", "description": "z".repeat(600)}))).unwrap();
        assert_eq!(patch.title.as_deref(), Some(""));
        assert_eq!(patch.description.map(|d| d.len()), Some(600));
    }

    #[test]
    fn patch_ignores_identity_fields_and_rejects_wrong_types() {
        let patch = parse_patch(&raw(json!({"id": 99, "createdAt": "1970-01-01T00:00:00.000Z"}))).unwrap();
        assert!(patch.is_empty());
        let err = parse_patch(&raw(json!({"title": 5}))).unwrap_err();
        assert_eq!(err.to_string(), "title must be a string");
    }
}
