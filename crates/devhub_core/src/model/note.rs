//! Note domain model.
//!
//! # Responsibility
//! - Define the note record persisted under the `notes` snapshot key.
//!
//! # Invariants
//! - `created_at` is fixed at creation; `updated_at` moves on every edit.
//! - An absent category is represented by the empty string.
//! - `tags` keep the order the user entered them in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Editable-field patch applied by [`crate::store::RecordStore::replace`].
///
/// `updated_at` is supplied by the caller so that the record store stays
/// clock-free; `id` and `created_at` are untouched by an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub updated_at: String,
}

impl Note {
    /// Creates a note with a generated stable id.
    ///
    /// `created_at` and `updated_at` start equal.
    pub fn new(title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, created_at)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        let created_at = created_at.into();
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            category: String::new(),
            tags: Vec::new(),
            updated_at: created_at.clone(),
            created_at,
        }
    }
}
