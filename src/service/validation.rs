//! Field rules for bug candidates. Every rule runs; violations are collected in rule order.

use crate::error::AppError;
use crate::model::{Bug, Status};
use crate::service::input::{is_truthy, RawBug};
use serde_json::Value;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.valid {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

pub struct BugValidator;

impl BugValidator {
    /// Check a raw candidate (create body). No side effects.
    pub fn validate(candidate: &RawBug) -> ValidationReport {
        let mut errors = Vec::new();
        check_text(&mut errors, "Title", candidate.get("title"), TITLE_MAX_LEN);
        check_text(&mut errors, "Description", candidate.get("description"), DESCRIPTION_MAX_LEN);
        if let Some(status) = candidate.get("status").filter(|v| is_truthy(v)) {
            if Self::validate_status(status).is_none() {
                errors.push(format!("Status must be one of: {}", status_list()));
            }
        }
        ValidationReport::from_errors(errors)
    }

    /// The status named by `status`, if it is a string holding one of the wire names.
    pub fn validate_status(status: &Value) -> Option<Status> {
        status.as_str().and_then(Status::parse)
    }

    /// Re-check a merged record's text fields. Used only when updates are validated strictly.
    pub fn validate_record(bug: &Bug) -> ValidationReport {
        let mut errors = Vec::new();
        let title = Value::String(bug.title.clone());
        let description = Value::String(bug.description.clone());
        check_text(&mut errors, "Title", Some(&title), TITLE_MAX_LEN);
        check_text(&mut errors, "Description", Some(&description), DESCRIPTION_MAX_LEN);
        ValidationReport::from_errors(errors)
    }
}

fn status_list() -> String {
    Status::ALL.iter().map(Status::as_str).collect::<Vec<_>>().join(", ")
}

/// Required non-blank string, then a length cap on the untrimmed value. Both can fire together.
fn check_text(errors: &mut Vec<String>, label: &str, value: Option<&Value>, max: usize) {
    let text = value.and_then(Value::as_str);
    if text.map_or(true, |s| s.trim().is_empty()) {
        errors.push(format!("{} is required and must be a non-empty string", label));
    }
    if let Some(s) = text {
        // Counted in UTF-16 code units, the unit browser clients measure `length` in.
        if s.encode_utf16().count() > max {
            errors.push(format!("{} must be less than {} characters", label, max));
        }
    }
}
