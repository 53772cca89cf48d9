//! In-memory task store.
//!
//! # Responsibility
//! - Own the ordered task collection for one screen.
//! - Expose the only mutation paths: add, toggle, edit, remove.
//!
//! # Invariants
//! - Every mutation replaces the current snapshot; earlier snapshots stay
//!   unchanged.
//! - Removal is two-phase: a `PendingRemoval` must be resolved with a
//!   confirmation choice before anything is deleted.

pub mod snapshot;
pub mod task_store;
