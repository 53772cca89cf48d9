//! Platform collaborator contracts.
//!
//! # Responsibility
//! - Describe what the core asks the host UI to present: notices, confirm
//!   dialogs and input focus changes.
//! - Keep presentation (widgets, styling, alert rendering) outside core.
//!
//! # Invariants
//! - Core never waits on a collaborator; answers come back as later events.

use crate::model::task::TaskId;

/// Informational message with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Confirm/cancel question for a pending removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Task the answer applies to.
    pub task_id: TaskId,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Host-side alert presenter.
pub trait DialogPresenter {
    fn present_notice(&mut self, notice: &Notice);
    fn present_confirm(&mut self, dialog: &ConfirmDialog);
}

/// Host-side focus control for the title input of one row.
pub trait InputFocus {
    fn focus(&mut self, task_id: TaskId);
    fn blur(&mut self, task_id: TaskId);
}

/// Focus change requested by a row transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Focus(TaskId),
    Blur(TaskId),
}

impl FocusChange {
    /// Forwards this change to a host focus controller.
    pub fn apply(self, focus: &mut dyn InputFocus) {
        match self {
            Self::Focus(task_id) => focus.focus(task_id),
            Self::Blur(task_id) => focus.blur(task_id),
        }
    }
}

/// Collects every request instead of presenting it.
///
/// Used by hosts that forward requests in batches (FFI, CLI) and by tests.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    pub notices: Vec<Notice>,
    pub confirms: Vec<ConfirmDialog>,
    pub focus_changes: Vec<FocusChange>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> RecordingPlatform {
        std::mem::take(self)
    }
}

impl DialogPresenter for RecordingPlatform {
    fn present_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn present_confirm(&mut self, dialog: &ConfirmDialog) {
        self.confirms.push(dialog.clone());
    }
}

impl InputFocus for RecordingPlatform {
    fn focus(&mut self, task_id: TaskId) {
        self.focus_changes.push(FocusChange::Focus(task_id));
    }

    fn blur(&mut self, task_id: TaskId) {
        self.focus_changes.push(FocusChange::Blur(task_id));
    }
}
