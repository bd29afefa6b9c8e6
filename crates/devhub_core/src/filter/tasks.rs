//! Task status filtering.
//!
//! # Responsibility
//! - Derive the visible task subset for one status selector.
//! - Interpret deadline text against a caller-supplied instant.
//!
//! # Invariants
//! - Archived tasks are excluded from every selector.
//! - A missing or unparseable deadline is never today, upcoming or
//!   overdue; such tasks surface only under `all` and `completed`.

use crate::model::task::Task;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Status bucket chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSelector {
    #[default]
    All,
    Today,
    Upcoming,
    Overdue,
    Completed,
}

impl TaskSelector {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "upcoming" => Some(Self::Upcoming),
            "overdue" => Some(Self::Overdue),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Filters tasks by selector, preserving insertion order.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    selector: TaskSelector,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| !task.archived)
        .filter(|task| matches_selector(task, selector, now))
        .collect()
}

fn matches_selector(task: &Task, selector: TaskSelector, now: DateTime<Utc>) -> bool {
    match selector {
        TaskSelector::All => true,
        TaskSelector::Completed => task.completed,
        TaskSelector::Today => {
            deadline_of(task).map_or(false, |deadline| deadline.date_naive() == now.date_naive())
        }
        TaskSelector::Upcoming => deadline_of(task).map_or(false, |deadline| deadline > now),
        TaskSelector::Overdue => {
            !task.completed && deadline_of(task).map_or(false, |deadline| deadline < now)
        }
    }
}

fn deadline_of(task: &Task) -> Option<DateTime<Utc>> {
    task.deadline.as_deref().and_then(parse_deadline)
}

/// Parses deadline text into a UTC instant.
///
/// Accepts RFC 3339, the `YYYY-MM-DDTHH:MM[:SS]` form produced by
/// datetime inputs (read as UTC), and a bare date (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::parse_deadline;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parse_accepts_rfc3339_and_datetime_input_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap();
        assert_eq!(parse_deadline("2026-08-07T14:30:00+00:00"), Some(expected));
        assert_eq!(parse_deadline("2026-08-07T14:30"), Some(expected));
    }

    #[test]
    fn parse_accepts_bare_dates_at_midnight() {
        let expected = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        assert_eq!(parse_deadline("2026-08-07"), Some(expected));
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!(parse_deadline(""), None);
        assert_eq!(parse_deadline("next tuesday"), None);
    }
}
