//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list screen to Dart via FRB.
//! - Flatten dialogs and focus requests into response envelopes, since the
//!   Dart side owns presentation.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide screen; every call holds its lock for the whole call.

use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, ConfirmChoice, FocusChange, HomeScreen, RecordingPlatform, RowAction, RowView,
    ScreenCopy,
};

type Screen = HomeScreen<RecordingPlatform>;

static SCREEN: Lazy<Mutex<Screen>> = Lazy::new(|| Mutex::new(new_screen()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - `level`: `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Safe to repeat with the same `level + log_dir`; other values are rejected.
/// - Never panics; returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One list row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    pub task_id: i64,
    pub index: u32,
    pub title: String,
    pub done: bool,
    pub editing: bool,
    pub delete_enabled: bool,
}

/// Alert to show: a notice when `confirm_label` is `None`, else a
/// confirm/cancel dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogItem {
    pub task_id: Option<i64>,
    pub title: String,
    pub message: String,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
}

/// Focus change for one row input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusItem {
    pub task_id: i64,
    pub focused: bool,
}

/// Response envelope shared by every task call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksResponse {
    /// Whether the call changed anything.
    pub ok: bool,
    /// Human-readable outcome for diagnostics.
    pub message: String,
    pub tasks_counter: u32,
    pub rows: Vec<TaskRowItem>,
    pub dialogs: Vec<DialogItem>,
    pub focus: Vec<FocusItem>,
}

/// Returns the current rows without changing anything.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; `ok` is always `true`.
/// - Drains dialogs and focus changes not yet reported.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> TasksResponse {
    list_on(&mut lock_screen())
}

/// Submits a new task title from the input.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Duplicate titles return `ok = false` plus a notice in `dialogs`; blank
///   titles return `ok = false` with no dialog.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_add(title: String) -> TasksResponse {
    add_on(&mut lock_screen(), &title)
}

/// Toggles completion of one task.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; unknown ids return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_toggle(task_id: i64) -> TasksResponse {
    row_action_on(&mut lock_screen(), task_id, "press", None)
}

/// Routes one row event.
///
/// `action`: `press|start_edit|change_draft|cancel_edit|submit_edit|delete`.
/// `text` is required for `change_draft` and ignored otherwise.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; unknown actions or ids return `ok = false`.
/// - Edit transitions report the matching entry in `focus`.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_row_action(task_id: i64, action: String, text: Option<String>) -> TasksResponse {
    row_action_on(&mut lock_screen(), task_id, &action, text)
}

/// Asks for removal confirmation; the dialog comes back in `dialogs`.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; nothing is deleted until `tasks_resolve_remove`.
/// - Returns `ok = false` while the row is being edited.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_request_remove(task_id: i64) -> TasksResponse {
    row_action_on(&mut lock_screen(), task_id, "delete", None)
}

/// Resolves the confirmation shown by `tasks_request_remove`.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; `ok` is `true` only when a task was removed.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_resolve_remove(confirm: bool) -> TasksResponse {
    resolve_remove_on(&mut lock_screen(), confirm)
}

fn new_screen() -> Screen {
    let copy = match AppConfig::from_env() {
        Ok(config) => config.copy(),
        Err(err) => {
            warn!("event=config_load module=ffi status=error error={err}");
            ScreenCopy::default()
        }
    };
    HomeScreen::new(RecordingPlatform::new(), copy)
}

fn lock_screen() -> MutexGuard<'static, Screen> {
    SCREEN.lock().unwrap_or_else(PoisonError::into_inner)
}

fn list_on(screen: &mut Screen) -> TasksResponse {
    respond(screen, true, "ok")
}

fn add_on(screen: &mut Screen, title: &str) -> TasksResponse {
    match screen.add_task(title) {
        Some(_) => respond(screen, true, "Task created."),
        None => respond(screen, false, "Task rejected."),
    }
}

fn row_action_on(
    screen: &mut Screen,
    task_id: i64,
    action: &str,
    text: Option<String>,
) -> TasksResponse {
    let action = match parse_row_action(action, text) {
        Ok(action) => action,
        Err(message) => return respond(screen, false, &message),
    };
    let changed = screen.dispatch(task_id, action);
    let message = if changed { "ok" } else { "No change." };
    respond(screen, changed, message)
}

fn resolve_remove_on(screen: &mut Screen, confirm: bool) -> TasksResponse {
    let choice = if confirm {
        ConfirmChoice::Confirm
    } else {
        ConfirmChoice::Cancel
    };
    if screen.resolve_removal(choice) {
        respond(screen, true, "Task removed.")
    } else {
        respond(screen, false, "No change.")
    }
}

fn parse_row_action(action: &str, text: Option<String>) -> Result<RowAction, String> {
    match action.trim() {
        "press" => Ok(RowAction::Press),
        "start_edit" => Ok(RowAction::StartEdit),
        "change_draft" => text
            .map(RowAction::ChangeDraft)
            .ok_or_else(|| "change_draft requires text".to_string()),
        "cancel_edit" => Ok(RowAction::CancelEdit),
        "submit_edit" => Ok(RowAction::SubmitEdit),
        "delete" => Ok(RowAction::Delete),
        other => Err(format!("unsupported row action `{other}`")),
    }
}

fn respond(screen: &mut Screen, ok: bool, message: &str) -> TasksResponse {
    let recorded = screen.platform_mut().drain();
    let mut dialogs = recorded
        .notices
        .into_iter()
        .map(|notice| DialogItem {
            task_id: None,
            title: notice.title,
            message: notice.message,
            confirm_label: None,
            cancel_label: None,
        })
        .collect::<Vec<_>>();
    dialogs.extend(recorded.confirms.into_iter().map(|dialog| DialogItem {
        task_id: Some(dialog.task_id),
        title: dialog.title,
        message: dialog.message,
        confirm_label: Some(dialog.confirm_label),
        cancel_label: Some(dialog.cancel_label),
    }));

    let focus = recorded
        .focus_changes
        .into_iter()
        .map(|change| match change {
            FocusChange::Focus(task_id) => FocusItem {
                task_id,
                focused: true,
            },
            FocusChange::Blur(task_id) => FocusItem {
                task_id,
                focused: false,
            },
        })
        .collect();

    TasksResponse {
        ok,
        message: message.to_string(),
        tasks_counter: saturating_u32(screen.tasks_counter()),
        rows: screen.rows().into_iter().map(to_row_item).collect(),
        dialogs,
        focus,
    }
}

fn to_row_item(row: RowView) -> TaskRowItem {
    TaskRowItem {
        task_id: row.key,
        index: saturating_u32(row.index),
        title: row.title,
        done: row.done,
        editing: row.editing,
        delete_enabled: row.delete_enabled,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
