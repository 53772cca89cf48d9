//! Home screen: header counter, add-task input and task list.
//!
//! # Responsibility
//! - Hold the only `TaskStore` of the screen.
//! - Dispatch row actions through the matching `RowController`.
//! - Present the duplicate-title notice and the removal confirmation.
//!
//! # Invariants
//! - Children never mutate the collection directly; every change goes
//!   through a store operation.
//! - At most one removal awaits confirmation at a time.

use crate::config::ScreenCopy;
use crate::model::task::TaskId;
use crate::platform::{ConfirmDialog, DialogPresenter, FocusChange, InputFocus, Notice};
use crate::store::snapshot::TaskSnapshot;
use crate::store::task_store::{AddTaskError, ConfirmChoice, PendingRemoval, TaskStore};
use crate::view::list::{RowRegistry, RowView};
use crate::view::row::RowController;
use log::{debug, warn};

/// Event raised by one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Press on the marker/title area; toggles completion.
    Press,
    StartEdit,
    ChangeDraft(String),
    CancelEdit,
    SubmitEdit,
    Delete,
}

/// The task list screen.
pub struct HomeScreen<P> {
    store: TaskStore,
    rows: RowRegistry,
    pending_removal: Option<PendingRemoval>,
    copy: ScreenCopy,
    platform: P,
}

impl<P: DialogPresenter + InputFocus> HomeScreen<P> {
    /// Creates an empty screen with wall-clock task ids.
    pub fn new(platform: P, copy: ScreenCopy) -> Self {
        Self::with_store(TaskStore::new(), platform, copy)
    }

    pub fn with_store(store: TaskStore, platform: P, copy: ScreenCopy) -> Self {
        Self {
            store,
            rows: RowRegistry::new(),
            pending_removal: None,
            copy,
            platform,
        }
    }

    /// Counter shown by the header.
    pub fn tasks_counter(&self) -> usize {
        self.store.len()
    }

    pub fn snapshot(&self) -> TaskSnapshot {
        self.store.snapshot()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Row views for the current snapshot.
    pub fn rows(&mut self) -> Vec<RowView> {
        let snapshot = self.store.snapshot();
        self.rows.render(&snapshot)
    }

    /// Edit state of one row, if the row has been touched or rendered.
    pub fn row(&self, task_id: TaskId) -> Option<&RowController> {
        self.rows.get(task_id)
    }

    /// Task id awaiting removal confirmation, if any.
    pub fn pending_removal(&self) -> Option<TaskId> {
        self.pending_removal.as_ref().map(PendingRemoval::task_id)
    }

    /// Handles an add-task submission from the input.
    ///
    /// Returns the new id, or `None` when the title was rejected. A
    /// duplicate title raises the "already registered" notice.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        match self.store.add_task(title) {
            Ok(id) => Some(id),
            Err(AddTaskError::EmptyTitle) => None,
            Err(AddTaskError::DuplicateTitle { .. }) => {
                let notice = Notice {
                    title: self.copy.duplicate_title.clone(),
                    message: self.copy.duplicate_message.clone(),
                };
                self.platform.present_notice(&notice);
                None
            }
        }
    }

    /// Routes one row event.
    ///
    /// Returns `false` when the event changed nothing (unknown id, disabled
    /// action, or a transition that does not apply to the current state).
    pub fn dispatch(&mut self, task_id: TaskId, action: RowAction) -> bool {
        let Some(task) = self.store.get(task_id).cloned() else {
            debug!("event=row_action module=screen status=skipped reason=not_found id={task_id}");
            return false;
        };
        let row = self.rows.row_mut(task_id);
        let platform = &mut self.platform;

        match action {
            RowAction::Press => row.press(&mut self.store),
            RowAction::StartEdit => apply_focus(row.start_edit(&task), platform),
            RowAction::ChangeDraft(text) => {
                let editing = row.is_editing();
                row.change_draft(text);
                editing
            }
            RowAction::CancelEdit => apply_focus(row.cancel_edit(), platform),
            RowAction::SubmitEdit => apply_focus(row.submit_edit(&mut self.store), platform),
            RowAction::Delete => {
                let Some(pending) = row.request_delete(&self.store) else {
                    return false;
                };
                self.present_removal(pending);
                true
            }
        }
    }

    /// Resolves the confirmation currently shown.
    ///
    /// Returns whether a task was removed.
    pub fn resolve_removal(&mut self, choice: ConfirmChoice) -> bool {
        let Some(pending) = self.pending_removal.take() else {
            debug!("event=removal_resolve module=screen status=skipped reason=none_pending");
            return false;
        };
        let task_id = pending.task_id();
        let removed = self.store.resolve_removal(pending, choice);
        if removed {
            self.rows.forget(task_id);
        }
        removed
    }

    fn present_removal(&mut self, pending: PendingRemoval) {
        if let Some(replaced) = self.pending_removal.take() {
            warn!(
                "event=removal_request module=screen status=replaced previous_id={} id={}",
                replaced.task_id(),
                pending.task_id()
            );
            self.store.resolve_removal(replaced, ConfirmChoice::Cancel);
        }

        let dialog = ConfirmDialog {
            task_id: pending.task_id(),
            title: self.copy.remove_title.clone(),
            message: self.copy.remove_message.clone(),
            confirm_label: self.copy.remove_confirm.clone(),
            cancel_label: self.copy.remove_cancel.clone(),
        };
        self.pending_removal = Some(pending);
        self.platform.present_confirm(&dialog);
    }
}

fn apply_focus<P: InputFocus>(change: Option<FocusChange>, platform: &mut P) -> bool {
    match change {
        Some(change) => {
            change.apply(platform);
            true
        }
        None => false,
    }
}
