//! Note draft session and the tag string/list boundary.

use crate::form::FormMode;
use crate::model::note::{Note, NotePatch};
use crate::store::{KeyValueStore, NoteStore, StoreResult};
use chrono::{DateTime, Utc};

/// Editable note draft for the create/edit dialog flow.
///
/// Tags are edited as one comma-joined string and re-split on submit;
/// [`split_tags`]/[`join_tags`] are the only conversion boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub mode: FormMode,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}

impl NoteForm {
    /// Opens a creation session with default fields.
    pub fn open() -> Self {
        Self::default()
    }

    /// Opens an edit session seeded from the note's current values.
    pub fn open_edit(note: &Note) -> Self {
        Self {
            mode: FormMode::Edit(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            tags: join_tags(&note.tags),
        }
    }

    /// Discards the draft without touching the store.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Commits the draft to the store and resets the session.
    ///
    /// Create mode stamps `created_at = updated_at = now`; edit mode
    /// refreshes `updated_at` only. Returns the affected record id.
    pub fn submit<K: KeyValueStore>(
        &mut self,
        store: &mut NoteStore<K>,
        now: DateTime<Utc>,
    ) -> StoreResult<String> {
        let tags = split_tags(&self.tags);
        let id = match std::mem::take(&mut self.mode) {
            FormMode::Create => {
                let mut note = Note::new(self.title.clone(), now.to_rfc3339());
                note.content = self.content.clone();
                note.category = self.category.clone();
                note.tags = tags;
                let id = note.id.clone();
                store.append(note)?;
                id
            }
            FormMode::Edit(id) => {
                store.replace(
                    &id,
                    NotePatch {
                        title: self.title.clone(),
                        content: self.content.clone(),
                        category: self.category.clone(),
                        tags,
                        updated_at: now.to_rfc3339(),
                    },
                )?;
                id
            }
        };

        *self = Self::default();
        Ok(id)
    }
}

/// Splits comma-separated tag input: trim each entry, drop empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a tag list back into the editable comma-separated form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
