//! Form sessions: transient drafts for create/edit flows.
//!
//! # Responsibility
//! - Hold one editable draft per entity, independent of the store.
//! - Synthesize records on create and patches on edit at submit time.
//!
//! # Invariants
//! - A draft never mutates the store except through submit.
//! - Submit and cancel both reset the session to pristine create state.
//! - Titles are not validated; empty titles are accepted by design.

mod note_form;
mod task_form;

pub use note_form::{join_tags, split_tags, NoteForm};
pub use task_form::TaskForm;

/// Whether the session drafts a new record or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(String),
}
