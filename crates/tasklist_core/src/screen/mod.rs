//! Screen composition.
//!
//! # Responsibility
//! - Own the task store and row registry for one screen lifetime.
//! - Route input and row events to store operations.
//! - Turn store rejections into platform notices.

pub mod home;
