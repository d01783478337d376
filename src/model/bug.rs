//! The bug record as stored and served, plus the typed create/update inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority used when a create request omits one. Priority is free-form text; see `NewBug::priority`.
pub const DEFAULT_PRIORITY: &str = "medium";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in-progress",
            Status::Resolved => "resolved",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(s: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: String,
    #[serde(with = "crate::model::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::model::timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Input for `BugStore::create`. Built from a request body only after validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    /// `None` lets the store apply `Status::Open`.
    pub status: Option<Status>,
    /// `None` lets the store apply `DEFAULT_PRIORITY`.
    pub priority: Option<String>,
}

impl NewBug {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
            priority: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Partial update. Absent fields leave the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BugPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<String>,
}

impl BugPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none() && self.priority.is_none()
    }

    /// Merge onto `bug` field by field. Identity and timestamps are the store's business.
    pub fn apply_to(self, bug: &mut Bug) {
        if let Some(title) = self.title {
            bug.title = title;
        }
        if let Some(description) = self.description {
            bug.description = description;
        }
        if let Some(status) = self.status {
            bug.status = status;
        }
        if let Some(priority) = self.priority {
            bug.priority = priority;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Bug {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        Bug {
            id: 7,
            title: "Crash on save".into(),
            description: "Editor closes".into(),
            status: Status::InProgress,
            priority: "high".into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(Status::parse("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("In-Progress"), None);
        assert_eq!(Status::parse("closed"), None);
        assert_eq!(Status::default(), Status::Open);
    }

    #[test]
    fn serializes_camel_case_record() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["status"], "in-progress");
        assert_eq!(v["createdAt"], "2026-01-02T03:04:05.000Z");
        assert_eq!(v["updatedAt"], "2026-01-02T03:04:05.000Z");
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn patch_keeps_absent_fields() {
        let mut bug = sample();
        BugPatch {
            title: Some("Crash on close".into()),
            ..Default::default()
        }
        .apply_to(&mut bug);
        assert_eq!(bug.title, "Crash on close");
        assert_eq!(bug.description, "Editor closes");
        assert_eq!(bug.status, Status::InProgress);
        assert_eq!(bug.priority, "high");
    }
}
