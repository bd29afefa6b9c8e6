//! Shared free-text matching.
//!
//! One implementation backs the note search and every reference-catalog
//! search: case-insensitive substring, OR across the candidate fields.

/// Sentinel category selecting every record.
pub const ALL_CATEGORIES: &str = "all";

/// Returns whether any field contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn matches_query<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Returns whether `category` selects `candidate`.
///
/// The `all` sentinel selects everything; anything else is an exact match.
pub fn matches_category(category: &str, candidate: &str) -> bool {
    category == ALL_CATEGORIES || category == candidate
}
