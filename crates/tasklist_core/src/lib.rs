//! Core state and behavior for the task list screen.
//! Presentation stays with the host; this crate owns every list invariant.

pub mod config;
pub mod logging;
pub mod model;
pub mod platform;
pub mod screen;
pub mod store;
pub mod view;

pub use config::{AppConfig, ConfigError, Locale, ScreenCopy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{
    is_blank_title, EpochMillisIds, SequentialIds, Task, TaskId, TaskIdSource,
};
pub use platform::{
    ConfirmDialog, DialogPresenter, FocusChange, InputFocus, Notice, RecordingPlatform,
};
pub use screen::home::{HomeScreen, RowAction};
pub use store::snapshot::TaskSnapshot;
pub use store::task_store::{AddTaskError, AddTaskResult, ConfirmChoice, PendingRemoval, TaskStore};
pub use view::list::{RowRegistry, RowView};
pub use view::row::{RowController, RowMode};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
