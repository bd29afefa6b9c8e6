//! Task draft session.

use crate::form::FormMode;
use crate::model::task::{Priority, Task, TaskPatch};
use crate::store::{KeyValueStore, StoreResult, TaskStore};
use chrono::{DateTime, Utc};

/// Editable task draft for the create/edit dialog flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    /// Deadline text as entered; blank means no deadline.
    pub deadline: String,
    pub priority: Priority,
}

impl TaskForm {
    /// Opens a creation session with default fields.
    pub fn open() -> Self {
        Self::default()
    }

    /// Opens an edit session seeded from the task's current values.
    pub fn open_edit(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            deadline: task.deadline.clone().unwrap_or_default(),
            priority: task.priority,
        }
    }

    /// Discards the draft without touching the store.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Commits the draft to the store and resets the session.
    ///
    /// Create mode appends a new record stamped with `now`; edit mode
    /// patches the target record (silently a no-op when the id vanished).
    /// Returns the id of the affected record.
    pub fn submit<K: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<K>,
        now: DateTime<Utc>,
    ) -> StoreResult<String> {
        let deadline = none_if_blank(&self.deadline);
        let id = match std::mem::take(&mut self.mode) {
            FormMode::Create => {
                let mut task = Task::new(self.title.clone(), now.to_rfc3339());
                task.description = self.description.clone();
                task.deadline = deadline;
                task.priority = self.priority;
                let id = task.id.clone();
                store.append(task)?;
                id
            }
            FormMode::Edit(id) => {
                store.replace(
                    &id,
                    TaskPatch {
                        title: self.title.clone(),
                        description: self.description.clone(),
                        deadline,
                        priority: self.priority,
                    },
                )?;
                id
            }
        };

        *self = Self::default();
        Ok(id)
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
