//! Domain model for the task list screen.
//!
//! # Responsibility
//! - Define the canonical `Task` record shown by every row.
//! - Own the blank-title rule shared by add and edit paths.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.
//! - Titles held by a task are never empty after trimming.

pub mod task;
