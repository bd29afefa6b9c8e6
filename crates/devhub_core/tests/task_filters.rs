use chrono::{DateTime, TimeZone, Utc};
use devhub_core::{filter_tasks, Task, TaskSelector};

const CREATED: &str = "2026-08-01T09:00:00+00:00";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

fn task(id: &str, deadline: Option<&str>) -> Task {
    let mut task = Task::with_id(id, format!("task {id}"), CREATED);
    task.deadline = deadline.map(str::to_string);
    task
}

fn visible_ids(tasks: &[Task], selector: TaskSelector) -> Vec<&str> {
    filter_tasks(tasks, selector, now())
        .into_iter()
        .map(|task| task.id.as_str())
        .collect()
}

#[test]
fn upcoming_deadline_shows_under_upcoming_only() {
    // Scenario: deadline tomorrow, not completed.
    let tasks = vec![task("t1", Some("2026-08-08T12:00"))];

    assert_eq!(visible_ids(&tasks, TaskSelector::Upcoming), ["t1"]);
    assert!(visible_ids(&tasks, TaskSelector::Overdue).is_empty());
    assert!(visible_ids(&tasks, TaskSelector::Today).is_empty());
    assert_eq!(visible_ids(&tasks, TaskSelector::All), ["t1"]);
}

#[test]
fn past_deadline_shows_under_overdue_and_all_but_not_completed() {
    // Scenario: deadline yesterday, completed left false.
    let tasks = vec![task("t1", Some("2026-08-06T12:00"))];

    assert_eq!(visible_ids(&tasks, TaskSelector::Overdue), ["t1"]);
    assert_eq!(visible_ids(&tasks, TaskSelector::All), ["t1"]);
    assert!(visible_ids(&tasks, TaskSelector::Completed).is_empty());
}

#[test]
fn completed_task_is_never_overdue_even_with_past_deadline() {
    let mut overdue_but_done = task("t1", Some("2026-08-06T12:00"));
    overdue_but_done.completed = true;
    let tasks = vec![overdue_but_done];

    assert!(visible_ids(&tasks, TaskSelector::Overdue).is_empty());
    assert_eq!(visible_ids(&tasks, TaskSelector::Completed), ["t1"]);
}

#[test]
fn today_matches_calendar_date_not_instant() {
    let tasks = vec![
        task("earlier-today", Some("2026-08-07T08:00")),
        task("later-today", Some("2026-08-07T23:30")),
        task("tomorrow", Some("2026-08-08T00:30")),
    ];

    assert_eq!(
        visible_ids(&tasks, TaskSelector::Today),
        ["earlier-today", "later-today"]
    );
}

#[test]
fn archived_tasks_are_absent_from_every_selector() {
    let mut archived = task("t1", Some("2026-08-06T12:00"));
    archived.archived = true;
    let mut archived_done = task("t2", Some("2026-08-08T12:00"));
    archived_done.archived = true;
    archived_done.completed = true;
    let tasks = vec![archived, archived_done];

    for selector in [
        TaskSelector::All,
        TaskSelector::Today,
        TaskSelector::Upcoming,
        TaskSelector::Overdue,
        TaskSelector::Completed,
    ] {
        assert!(
            visible_ids(&tasks, selector).is_empty(),
            "archived task leaked into {}",
            selector.as_str()
        );
    }
}

#[test]
fn unparseable_or_missing_deadline_is_never_date_bucketed() {
    let tasks = vec![task("garbage", Some("next tuesday")), task("none", None)];

    assert!(visible_ids(&tasks, TaskSelector::Today).is_empty());
    assert!(visible_ids(&tasks, TaskSelector::Upcoming).is_empty());
    assert!(visible_ids(&tasks, TaskSelector::Overdue).is_empty());
    assert_eq!(visible_ids(&tasks, TaskSelector::All), ["garbage", "none"]);
}

#[test]
fn filtering_preserves_insertion_order_without_secondary_sort() {
    let tasks = vec![
        task("late", Some("2026-08-05T12:00")),
        task("later", Some("2026-08-01T12:00")),
        task("latest", Some("2026-08-03T12:00")),
    ];

    // Overdue keeps store order, not deadline order.
    assert_eq!(
        visible_ids(&tasks, TaskSelector::Overdue),
        ["late", "later", "latest"]
    );
}

#[test]
fn selector_parse_round_trips_names() {
    for selector in [
        TaskSelector::All,
        TaskSelector::Today,
        TaskSelector::Upcoming,
        TaskSelector::Overdue,
        TaskSelector::Completed,
    ] {
        assert_eq!(TaskSelector::parse(selector.as_str()), Some(selector));
    }
    assert_eq!(TaskSelector::parse("someday"), None);
}
