use devhub_core::{filter_notes, note_categories, Note};

const CREATED: &str = "2026-08-01T09:00:00+00:00";

fn note(id: &str, title: &str, content: &str, category: &str, tags: &[&str]) -> Note {
    let mut note = Note::with_id(id, title, CREATED);
    note.content = content.to_string();
    note.category = category.to_string();
    note.tags = tags.iter().map(|tag| tag.to_string()).collect();
    note
}

fn sample_notes() -> Vec<Note> {
    vec![
        note(
            "n1",
            "Git stash",
            "git stash pop restores the latest stash",
            "git",
            &["git", "stash", "cli"],
        ),
        note(
            "n2",
            "Eloquent scopes",
            "query scopes keep controllers thin",
            "Laravel",
            &["Laravel", "eloquent"],
        ),
        note("n3", "Centering a div", "flexbox does it in four lines", "css", &[]),
    ]
}

fn ids<'a>(notes: Vec<&'a Note>) -> Vec<&'a str> {
    notes.into_iter().map(|note| note.id.as_str()).collect()
}

#[test]
fn query_matches_title_content_or_any_tag_case_insensitively() {
    let notes = sample_notes();

    // Tag "Laravel" found via lowercase fragment.
    assert_eq!(ids(filter_notes(&notes, "lara", "all")), ["n2"]);
    // Content match.
    assert_eq!(ids(filter_notes(&notes, "FLEXBOX", "all")), ["n3"]);
    // Title match.
    assert_eq!(ids(filter_notes(&notes, "git sta", "all")), ["n1"]);
    // No match.
    assert!(filter_notes(&notes, "kubernetes", "all").is_empty());
}

#[test]
fn category_selector_is_exact_and_all_is_identity() {
    let notes = sample_notes();

    assert_eq!(ids(filter_notes(&notes, "", "git")), ["n1"]);
    assert_eq!(ids(filter_notes(&notes, "", "all")), ["n1", "n2", "n3"]);
    // Exact match: lowercase "laravel" does not select the "Laravel" category.
    assert!(filter_notes(&notes, "", "laravel").is_empty());
}

#[test]
fn query_and_category_combine_with_and_semantics() {
    let notes = sample_notes();

    assert_eq!(ids(filter_notes(&notes, "stash", "all")), ["n1"]);
    assert!(filter_notes(&notes, "stash", "css").is_empty());
}

#[test]
fn empty_query_keeps_every_note_in_insertion_order() {
    let notes = sample_notes();
    assert_eq!(ids(filter_notes(&notes, "", "all")), ["n1", "n2", "n3"]);
}

#[test]
fn categories_are_all_plus_distinct_non_empty_in_first_appearance_order() {
    let notes = sample_notes();
    assert_eq!(note_categories(&notes), ["all", "git", "Laravel", "css"]);
}

#[test]
fn removing_the_last_note_of_a_category_drops_it_on_recomputation() {
    let mut notes = sample_notes();
    notes.retain(|note| note.id != "n3");
    assert_eq!(note_categories(&notes), ["all", "git", "Laravel"]);
}

#[test]
fn uncategorized_notes_do_not_produce_a_selector_entry() {
    let notes = vec![note("n1", "loose thought", "", "", &[])];
    assert_eq!(note_categories(&notes), ["all"]);
    // Still reachable through the sentinel.
    assert_eq!(ids(filter_notes(&notes, "", "all")), ["n1"]);
}
