//! Per-row edit state machine.
//!
//! # Responsibility
//! - Stage a draft title while a row is being edited.
//! - Commit the draft through the store on submit.
//! - Report the focus change every edit transition requires.
//!
//! # Invariants
//! - A row is either `Viewing` or `Editing { draft }`; the draft only exists
//!   while editing.
//! - Entering `Editing` yields `FocusChange::Focus`; leaving it yields
//!   `FocusChange::Blur`. Events that keep the state yield nothing.
//! - Delete is unavailable while editing; toggle is always available.

use crate::model::task::{Task, TaskId};
use crate::platform::FocusChange;
use crate::store::task_store::{PendingRemoval, TaskStore};
use log::debug;

/// Edit state of one row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

/// Controller for one list row, bound to a task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowController {
    task_id: TaskId,
    mode: RowMode,
}

impl RowController {
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            mode: RowMode::Viewing,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn mode(&self) -> &RowMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    pub fn can_delete(&self) -> bool {
        !self.is_editing()
    }

    /// Text shown in the row input: the draft while editing, else the title.
    pub fn display_title<'a>(&'a self, task: &'a Task) -> &'a str {
        match &self.mode {
            RowMode::Editing { draft } => draft.as_str(),
            RowMode::Viewing => task.title.as_str(),
        }
    }

    /// `Viewing -> Editing`, seeding the draft from `task`.
    pub fn start_edit(&mut self, task: &Task) -> Option<FocusChange> {
        if self.is_editing() {
            return None;
        }
        self.mode = RowMode::Editing {
            draft: task.title.clone(),
        };
        debug!("event=row_edit_start module=row status=ok id={}", self.task_id);
        Some(FocusChange::Focus(self.task_id))
    }

    /// Replaces the draft. Ignored while viewing.
    pub fn change_draft(&mut self, text: impl Into<String>) {
        if let RowMode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    /// `Editing -> Viewing`, discarding the draft.
    pub fn cancel_edit(&mut self) -> Option<FocusChange> {
        if !self.is_editing() {
            return None;
        }
        self.mode = RowMode::Viewing;
        debug!("event=row_edit_cancel module=row status=ok id={}", self.task_id);
        Some(FocusChange::Blur(self.task_id))
    }

    /// `Editing -> Viewing`, committing the draft through `store`.
    pub fn submit_edit(&mut self, store: &mut TaskStore) -> Option<FocusChange> {
        let RowMode::Editing { draft } = std::mem::take(&mut self.mode) else {
            return None;
        };
        let committed = store.edit_task(self.task_id, &draft);
        debug!(
            "event=row_edit_submit module=row status=ok id={} committed={}",
            self.task_id, committed
        );
        Some(FocusChange::Blur(self.task_id))
    }

    /// Toggles completion. Available in both states.
    pub fn press(&self, store: &mut TaskStore) -> bool {
        store.toggle_task_done(self.task_id)
    }

    /// Starts a confirmed removal, or `None` while editing.
    pub fn request_delete(&self, store: &TaskStore) -> Option<PendingRemoval> {
        if !self.can_delete() {
            debug!(
                "event=row_delete module=row status=skipped reason=editing id={}",
                self.task_id
            );
            return None;
        }
        Some(store.remove_task(self.task_id))
    }
}
