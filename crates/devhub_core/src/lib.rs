//! Core domain logic for the DevHub toolkit.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod db;
pub mod filter;
pub mod form;
pub mod logging;
pub mod model;
pub mod preview;
pub mod store;

pub use filter::notes::{filter_notes, note_categories, ALL_CATEGORIES};
pub use filter::tasks::{filter_tasks, TaskSelector};
pub use form::{join_tags, split_tags, FormMode, NoteForm, TaskForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NotePatch};
pub use model::task::{Priority, Task, TaskPatch};
pub use preview::derive_preview;
pub use store::{
    KeyValueStore, MemoryKvStore, NoteStore, RecordStore, SqliteKvStore, StoreError, StoreResult,
    TaskStore, NOTES_KEY, TASKS_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
