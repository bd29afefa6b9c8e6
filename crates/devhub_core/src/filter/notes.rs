//! Note search and category derivation.
//!
//! # Responsibility
//! - Derive the visible note subset for `(query, category)`.
//! - Project the live category selector set from current data.
//!
//! # Invariants
//! - The category set is recomputed on every call, never cached.

use crate::filter::text::{matches_category, matches_query};
use crate::model::note::Note;

pub use crate::filter::text::ALL_CATEGORIES;

/// Filters notes by free-text query and category selector.
///
/// The query matches title, content or any tag, case-insensitively; the
/// category is the `all` sentinel or an exact match.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str, category: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| {
            matches_query(
                query,
                [note.title.as_str(), note.content.as_str()]
                    .into_iter()
                    .chain(note.tags.iter().map(String::as_str)),
            )
        })
        .filter(|note| matches_category(category, &note.category))
        .collect()
}

/// Selectable categories: `all` plus the distinct non-empty categories
/// currently present, in first-appearance order.
pub fn note_categories(notes: &[Note]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for note in notes {
        let category = note.category.trim();
        if category.is_empty() {
            continue;
        }
        if !categories.iter().any(|known| known == category) {
            categories.push(category.to_string());
        }
    }
    categories
}
