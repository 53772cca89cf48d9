//! Immutable task list snapshots.

use crate::model::task::{Task, TaskId};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Ordered task collection at one point in time.
///
/// Cloning is cheap and shares storage with the store until its next
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSnapshot {
    tasks: Arc<Vec<Task>>,
}

impl TaskSnapshot {
    pub(crate) fn from_arc(tasks: Arc<Vec<Task>>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Looks a task up by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the task at a 0-based row position.
    pub fn at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns whether two snapshots share the same storage.
    pub fn same_version(&self, other: &TaskSnapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Serialize for TaskSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tasks.iter())
    }
}

impl<'a> IntoIterator for &'a TaskSnapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
