use chrono::{TimeZone, Utc};
use devhub_core::{
    KeyValueStore, MemoryKvStore, Note, NoteForm, NoteStore, RecordStore, NOTES_KEY,
};

fn empty_store() -> NoteStore<MemoryKvStore> {
    RecordStore::load(MemoryKvStore::new(), NOTES_KEY)
}

fn persisted_notes(store: &NoteStore<MemoryKvStore>) -> Vec<Note> {
    let snapshot = store.kv().get(NOTES_KEY).unwrap().expect("snapshot exists");
    serde_json::from_str(&snapshot).unwrap()
}

#[test]
fn created_note_round_trips_through_the_snapshot() {
    let mut store = empty_store();
    let created_at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();

    let mut form = NoteForm::open();
    form.title = "Git stash".to_string();
    form.content = "git stash pop restores the latest stash".to_string();
    form.category = "git".to_string();
    form.tags = "git, stash, cli".to_string();
    let id = form.submit(&mut store, created_at).unwrap();

    let persisted = persisted_notes(&store);
    assert_eq!(persisted, store.records());
    let note = &persisted[0];
    assert_eq!(note.id, id);
    assert_eq!(note.tags, ["git", "stash", "cli"]);
    assert_eq!(note.created_at, created_at.to_rfc3339());
    assert_eq!(note.updated_at, note.created_at);
}

#[test]
fn editing_content_moves_updated_at_and_keeps_created_at_and_id() {
    let mut store = empty_store();
    let created_at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
    let edited_at = Utc.with_ymd_and_hms(2026, 8, 7, 15, 30, 0).unwrap();

    let mut form = NoteForm::open();
    form.title = "Git stash".to_string();
    form.content = "first draft".to_string();
    let id = form.submit(&mut store, created_at).unwrap();

    let mut edit = NoteForm::open_edit(store.get(&id).unwrap());
    edit.content = "second draft".to_string();
    let edited_id = edit.submit(&mut store, edited_at).unwrap();

    let note = store.get(&id).unwrap();
    assert_eq!(edited_id, id);
    assert_eq!(note.content, "second draft");
    assert_eq!(note.created_at, created_at.to_rfc3339());
    assert_eq!(note.updated_at, edited_at.to_rfc3339());
}

#[test]
fn remove_deletes_by_id_and_is_idempotent() {
    let mut store = empty_store();
    let now = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();

    let mut form = NoteForm::open();
    form.title = "disposable".to_string();
    let id = form.submit(&mut store, now).unwrap();

    assert!(store.remove(&id).unwrap());
    assert!(!store.remove(&id).unwrap());
    assert!(store.records().is_empty());
    assert_eq!(persisted_notes(&store).len(), 0);
}

#[test]
fn note_snapshot_never_touches_the_tasks_key() {
    use devhub_core::TASKS_KEY;

    let mut kv = MemoryKvStore::new();
    kv.set(TASKS_KEY, "[]").unwrap();

    let mut note_store: NoteStore<MemoryKvStore> = RecordStore::load(kv, NOTES_KEY);
    let mut form = NoteForm::open();
    form.title = "keyspace check".to_string();
    form.submit(
        &mut note_store,
        Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
    )
    .unwrap();

    assert_eq!(
        note_store.kv().get(TASKS_KEY).unwrap().as_deref(),
        Some("[]")
    );
    assert!(note_store.kv().get(NOTES_KEY).unwrap().is_some());
}
