//! Domain records for the two persisted collections.
//!
//! # Responsibility
//! - Define the canonical Task and Note record shapes.
//! - Own the serialized field-name contract of the persisted snapshot.
//!
//! # Invariants
//! - Every record carries a stable string `id` that is never reused.
//! - `created_at` is set once at creation and never mutated.

pub mod note;
pub mod task;
