//! Normalize a candidate before it is stored: trim text, fill status/priority defaults.
//! Never rejects; run it after `BugValidator::validate` has accepted the candidate.

use crate::model::{NewBug, Status, DEFAULT_PRIORITY};
use crate::service::input::RawBug;
use serde_json::Value;

pub fn sanitize(candidate: &RawBug) -> NewBug {
    let text = |key: &str| {
        candidate
            .get(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };
    let non_empty = |key: &str| candidate.get(key).and_then(Value::as_str).filter(|s| !s.is_empty());

    NewBug {
        title: text("title"),
        description: text("description"),
        status: Some(non_empty("status").and_then(Status::parse).unwrap_or_default()),
        priority: Some(non_empty("priority").unwrap_or(DEFAULT_PRIORITY).to_string()),
    }
}
