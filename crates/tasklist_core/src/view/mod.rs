//! Row state machines and list projection.
//!
//! # Responsibility
//! - Hold per-row edit state keyed by task id.
//! - Project store snapshots into row view models.

pub mod list;
pub mod row;
