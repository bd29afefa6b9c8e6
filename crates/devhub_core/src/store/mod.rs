//! Record stores and their persistence seam.
//!
//! # Responsibility
//! - Define the key-value contract the record stores persist through.
//! - Own snapshot (de)serialization and the persist-after-mutation rule.
//!
//! # Invariants
//! - After any mutating store operation returns `Ok`, the in-memory
//!   collection and the persisted snapshot are consistent.
//! - A missing or corrupt snapshot loads as an empty collection, never as
//!   an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
mod record_store;

pub use kv::{KeyValueStore, KvError, KvResult, MemoryKvStore, SqliteKvStore};
pub use record_store::{NoteStore, Record, RecordStore, TaskStore, NOTES_KEY, TASKS_KEY};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for record-store persistence operations.
///
/// Read-side failures never surface here; only writing a snapshot can
/// fail once a store is loaded.
#[derive(Debug)]
pub enum StoreError {
    Kv(KvError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
