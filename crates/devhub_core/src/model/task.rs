//! Task domain model.
//!
//! # Responsibility
//! - Define the task record persisted under the `tasks` snapshot key.
//! - Provide lifecycle helpers for completion and archive semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `archived` is a soft flag: archived tasks stay in storage and are
//!   only hidden from filtered views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task urgency bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Serialized/display form, matching the snapshot contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses the snapshot/user form. Case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// One task record.
///
/// Field names in the persisted snapshot are camelCase; `deadline` is kept
/// as the text the user entered and only interpreted at filter time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub archived: bool,
    pub created_at: String,
}

/// Editable-field patch applied by [`crate::store::RecordStore::replace`].
///
/// Mirrors the edit form: completion, archive state, `id` and `created_at`
/// are untouched by an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    pub deadline: Option<String>,
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a generated stable id and default flags.
    pub fn new(title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, created_at)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            deadline: None,
            priority: Priority::default(),
            completed: false,
            archived: false,
            created_at: created_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task};

    #[test]
    fn new_task_defaults_to_open_and_unarchived() {
        let task = Task::new("write report", "2026-08-01T09:00:00+00:00");
        assert!(!task.completed);
        assert!(!task.archived);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn priority_parse_accepts_mixed_case_and_rejects_unknown() {
        assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn snapshot_field_names_are_camel_case() {
        let task = Task::with_id("t1", "x", "2026-08-01T09:00:00+00:00");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"priority\":\"medium\""));
        assert!(!json.contains("\"deadline\""));
    }
}
