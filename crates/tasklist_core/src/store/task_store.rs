//! Task store operations.
//!
//! # Responsibility
//! - Provide add/toggle/edit/remove over the screen's task collection.
//! - Enforce the case-insensitive unique-title rule at creation.
//!
//! # Invariants
//! - Task ids are unique within the store.
//! - Order is insertion order; nothing is reordered in place.
//! - Unknown ids on toggle/edit are silent no-ops.
//! - Log events carry ids and counts only, never titles.

use crate::model::task::{is_blank_title, EpochMillisIds, Task, TaskId, TaskIdSource};
use crate::store::snapshot::TaskSnapshot;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type AddTaskResult = Result<TaskId, AddTaskError>;

/// Rejection reasons for `TaskStore::add_task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTaskError {
    /// Title is blank (whitespace only).
    EmptyTitle,
    /// Another task already uses this title (case-insensitive).
    DuplicateTitle {
        existing: TaskId,
        requested: String,
    },
}

impl Display for AddTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::DuplicateTitle {
                existing,
                requested,
            } => write!(
                f,
                "task `{requested}` already registered (id {existing})"
            ),
        }
    }
}

impl Error for AddTaskError {}

/// User answer to a removal confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Cancel,
}

/// Removal awaiting user confirmation.
///
/// Only the store creates these; resolving one consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending removal does nothing until it is resolved"]
pub struct PendingRemoval {
    task_id: TaskId,
}

impl PendingRemoval {
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Owner of the ordered task collection.
pub struct TaskStore {
    tasks: Arc<Vec<Task>>,
    ids: Box<dyn TaskIdSource>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store with wall-clock ids.
    pub fn new() -> Self {
        Self::with_id_source(EpochMillisIds::new())
    }

    /// Creates an empty store with a caller-provided id source.
    pub fn with_id_source(ids: impl TaskIdSource + 'static) -> Self {
        Self {
            tasks: Arc::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::from_arc(Arc::clone(&self.tasks))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new task, keeping `title` exactly as submitted.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `DuplicateTitle` when an existing title matches case-insensitively.
    ///   The collection is left untouched.
    pub fn add_task(&mut self, title: &str) -> AddTaskResult {
        if is_blank_title(title) {
            debug!("event=task_add module=store status=rejected reason=empty_title");
            return Err(AddTaskError::EmptyTitle);
        }

        if let Some(existing) = self.tasks.iter().find(|task| task.has_title(title)) {
            info!(
                "event=task_add module=store status=rejected reason=duplicate_title existing_id={}",
                existing.id
            );
            return Err(AddTaskError::DuplicateTitle {
                existing: existing.id,
                requested: title.to_string(),
            });
        }

        let id = self.fresh_id();
        Arc::make_mut(&mut self.tasks).push(Task::new(id, title));
        info!(
            "event=task_add module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        Ok(id)
    }

    /// Flips `done` for one task.
    ///
    /// Returns `false` without touching the snapshot when `id` is unknown.
    pub fn toggle_task_done(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=store status=skipped reason=not_found id={id}");
            return false;
        };

        let task = &mut Arc::make_mut(&mut self.tasks)[index];
        task.done = !task.done;
        info!(
            "event=task_toggle module=store status=ok id={} done={}",
            id, task.done
        );
        true
    }

    /// Replaces the title of one task.
    ///
    /// Returns `false` when `id` is unknown or `new_title` is blank.
    /// Duplicate titles are not rejected here; they are only logged.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_edit module=store status=skipped reason=not_found id={id}");
            return false;
        };
        if is_blank_title(new_title) {
            debug!("event=task_edit module=store status=skipped reason=empty_title id={id}");
            return false;
        }

        if let Some(other) = self
            .tasks
            .iter()
            .find(|task| task.id != id && task.has_title(new_title))
        {
            warn!(
                "event=task_edit module=store status=ok duplicate_title=true id={} other_id={}",
                id, other.id
            );
        }

        Arc::make_mut(&mut self.tasks)[index].title = new_title.to_string();
        info!("event=task_edit module=store status=ok id={id}");
        true
    }

    /// Starts a removal; nothing is deleted until the returned value is
    /// resolved with `ConfirmChoice::Confirm`.
    pub fn remove_task(&self, id: TaskId) -> PendingRemoval {
        debug!(
            "event=task_remove module=store status=pending id={} known={}",
            id,
            self.position(id).is_some()
        );
        PendingRemoval { task_id: id }
    }

    /// Applies or drops a pending removal.
    ///
    /// Returns whether a task was removed.
    pub fn resolve_removal(&mut self, pending: PendingRemoval, choice: ConfirmChoice) -> bool {
        let id = pending.task_id;
        if choice == ConfirmChoice::Cancel {
            info!("event=task_remove module=store status=cancelled id={id}");
            return false;
        }

        let Some(index) = self.position(id) else {
            debug!("event=task_remove module=store status=skipped reason=not_found id={id}");
            return false;
        };

        Arc::make_mut(&mut self.tasks).remove(index);
        info!(
            "event=task_remove module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        true
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn fresh_id(&mut self) -> TaskId {
        loop {
            let id = self.ids.next_id();
            if self.position(id).is_none() {
                return id;
            }
            warn!("event=task_id_collision module=store status=retry id={id}");
        }
    }
}
