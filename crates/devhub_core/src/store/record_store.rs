//! Generic record store over a key-value snapshot.
//!
//! # Responsibility
//! - Single source of truth for one ordered record collection.
//! - Persist the full collection after every mutation.
//!
//! # Invariants
//! - Insertion order is the display default before filtering.
//! - `replace`/`remove` on an unknown id are silent no-ops.
//! - A failed snapshot read degrades to an empty collection.

use crate::model::note::{Note, NotePatch};
use crate::model::task::{Task, TaskPatch};
use crate::store::kv::KeyValueStore;
use crate::store::StoreResult;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Snapshot key for the task collection.
pub const TASKS_KEY: &str = "tasks";
/// Snapshot key for the note collection.
pub const NOTES_KEY: &str = "notes";

/// A record that can live in a [`RecordStore`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Editable-field patch merged over an existing record by `replace`.
    type Patch;

    fn id(&self) -> &str;
    fn apply_patch(&mut self, patch: Self::Patch);
}

impl Record for Task {
    type Patch = TaskPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        self.title = patch.title;
        self.description = patch.description;
        self.deadline = patch.deadline;
        self.priority = patch.priority;
    }
}

impl Record for Note {
    type Patch = NotePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply_patch(&mut self, patch: NotePatch) {
        self.title = patch.title;
        self.content = patch.content;
        self.category = patch.category;
        self.tags = patch.tags;
        self.updated_at = patch.updated_at;
    }
}

/// Ordered record collection with write-through persistence.
pub struct RecordStore<R: Record, K: KeyValueStore> {
    kv: K,
    key: &'static str,
    records: Vec<R>,
}

pub type TaskStore<K> = RecordStore<Task, K>;
pub type NoteStore<K> = RecordStore<Note, K>;

impl<R: Record, K: KeyValueStore> RecordStore<R, K> {
    /// Loads the persisted snapshot under `key`.
    ///
    /// A missing, unreadable or unparseable snapshot yields an empty
    /// collection; the next mutation overwrites it with a valid one.
    pub fn load(kv: K, key: &'static str) -> Self {
        let records = match kv.get(key) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<R>>(&snapshot) {
                Ok(records) => records,
                Err(err) => {
                    warn!("event=store_load module=store status=corrupt key={key} error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=read_error key={key} error={err}");
                Vec::new()
            }
        };

        info!(
            "event=store_load module=store status=ok key={key} records={}",
            records.len()
        );
        Self { kv, key, records }
    }

    /// The full ordered collection, archived/completed records included.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Read access to the underlying key-value store.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Appends a fully-formed record and persists.
    ///
    /// Uniqueness of the caller-supplied id is trusted, not checked.
    pub fn append(&mut self, record: R) -> StoreResult<()> {
        self.records.push(record);
        self.persist()
    }

    /// Merges `patch` over the record with matching id and persists.
    ///
    /// Returns `Ok(false)` without persisting when the id is unknown.
    pub fn replace(&mut self, id: &str, patch: R::Patch) -> StoreResult<bool> {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return Ok(false);
        };
        record.apply_patch(patch);
        self.persist()?;
        Ok(true)
    }

    /// Removes the record with matching id and persists. Idempotent.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Serializes the whole collection under the store key.
    ///
    /// Called at the end of every mutating method; no incremental diffing.
    fn persist(&mut self) -> StoreResult<()> {
        let snapshot = serde_json::to_string(&self.records)?;
        if let Err(err) = self.kv.set(self.key, &snapshot) {
            error!(
                "event=store_persist module=store status=error key={} error={err}",
                self.key
            );
            return Err(err.into());
        }
        Ok(())
    }
}

impl<K: KeyValueStore> RecordStore<Task, K> {
    /// Flips the completion flag of one task. No-op on unknown id.
    pub fn toggle_completed(&mut self, id: &str) -> StoreResult<bool> {
        let Some(task) = self.records.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(true)
    }

    /// Hides one task from filtered views while keeping it in storage.
    pub fn archive(&mut self, id: &str) -> StoreResult<bool> {
        let Some(task) = self.records.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.archived = true;
        self.persist()?;
        Ok(true)
    }
}
