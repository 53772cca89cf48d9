//! Task domain model.
//!
//! # Responsibility
//! - Define the record rendered by one list row.
//! - Generate creation-time ids that stay unique within a process.
//! - Decide which user-entered titles count as blank.
//!
//! # Invariants
//! - `id` is assigned once at creation and never mutated.
//! - Ids handed out by one `TaskIdSource` are strictly increasing.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier of one task.
///
/// Creation timestamp in epoch milliseconds, bumped when needed to stay unique.
pub type TaskId = i64;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation-time id, unique within the owning store.
    pub id: TaskId,
    /// Display title, mutable through edit.
    pub title: String,
    /// Completion flag, mutable through toggle.
    pub done: bool,
}

impl Task {
    /// Creates a not-yet-done task.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Case-insensitive title comparison used by the duplicate check.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Source of fresh task ids.
pub trait TaskIdSource: Send {
    fn next_id(&mut self) -> TaskId;
}

/// Default id source backed by the wall clock.
///
/// Falls back to `last + 1` when the clock does not move forward between
/// two creations.
#[derive(Debug, Default)]
pub struct EpochMillisIds {
    last: Option<TaskId>,
}

impl EpochMillisIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_after(&mut self, now_ms: TaskId) -> TaskId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

impl TaskIdSource for EpochMillisIds {
    fn next_id(&mut self) -> TaskId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as TaskId)
            .unwrap_or(0);
        self.next_after(now_ms)
    }
}

/// Counter-based id source, starting at a fixed value.
///
/// Useful for hosts that want deterministic ids (tests, replays).
#[derive(Debug)]
pub struct SequentialIds {
    next: TaskId,
}

impl SequentialIds {
    pub fn starting_at(first: TaskId) -> Self {
        Self { next: first }
    }
}

impl TaskIdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Returns whether a title has no visible characters.
///
/// Only used to reject input; accepted titles are stored as typed.
pub fn is_blank_title(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank_title, EpochMillisIds, SequentialIds, Task, TaskIdSource};

    #[test]
    fn new_task_starts_not_done() {
        let task = Task::new(7, "Buy milk");
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn has_title_ignores_case() {
        let task = Task::new(1, "Buy Milk");
        assert!(task.has_title("buy milk"));
        assert!(task.has_title("BUY MILK"));
        assert!(!task.has_title("buy milk!"));
    }

    #[test]
    fn epoch_ids_bump_when_clock_stalls_or_goes_back() {
        let mut ids = EpochMillisIds::new();
        assert_eq!(ids.next_after(1_000), 1_000);
        assert_eq!(ids.next_after(1_000), 1_001);
        assert_eq!(ids.next_after(900), 1_002);
        assert_eq!(ids.next_after(5_000), 5_000);
    }

    #[test]
    fn epoch_ids_are_strictly_increasing() {
        let mut ids = EpochMillisIds::new();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert!(first < second && second < third);
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
    }

    #[test]
    fn blank_titles_are_whitespace_only() {
        assert!(is_blank_title(""));
        assert!(is_blank_title(" 	
 "));
        assert!(!is_blank_title(" a "));
    }

    #[test]
    fn has_title_compares_whitespace_exactly() {
        let task = Task::new(1, "Buy milk");
        assert!(!task.has_title("Buy  milk"));
        assert!(!task.has_title("Buy milk "));
    }
}
