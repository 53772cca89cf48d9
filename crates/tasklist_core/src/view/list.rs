//! List projection over task snapshots.
//!
//! # Responsibility
//! - Produce one `RowView` per task, in snapshot order.
//! - Keep row controllers keyed by task id across renders.
//!
//! # Invariants
//! - Row identity is the task id, never the row position.
//! - Controllers for tasks missing from the rendered snapshot are dropped.

use crate::model::task::TaskId;
use crate::store::snapshot::TaskSnapshot;
use crate::view::row::RowController;
use serde::Serialize;
use std::collections::HashMap;

/// Read-only view model of one list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Stable row key.
    pub key: TaskId,
    /// 0-based position in the current snapshot.
    pub index: usize,
    /// Title input text (the draft while editing).
    pub title: String,
    pub done: bool,
    pub editing: bool,
    pub delete_enabled: bool,
}

impl RowView {
    /// Test id of the pressable title area.
    pub fn button_test_id(&self) -> String {
        format!("button-{}", self.index)
    }

    /// Test id of the completion marker.
    pub fn marker_test_id(&self) -> String {
        format!("marker-{}", self.index)
    }
}

/// Row controllers keyed by task id.
#[derive(Debug, Default)]
pub struct RowRegistry {
    rows: HashMap<TaskId, RowController>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, task_id: TaskId) -> Option<&RowController> {
        self.rows.get(&task_id)
    }

    /// Returns the controller for `task_id`, creating a `Viewing` one.
    pub fn row_mut(&mut self, task_id: TaskId) -> &mut RowController {
        self.rows
            .entry(task_id)
            .or_insert_with(|| RowController::new(task_id))
    }

    /// Drops the controller of a task that left the collection.
    pub fn forget(&mut self, task_id: TaskId) -> Option<RowController> {
        self.rows.remove(&task_id)
    }

    /// Projects `snapshot` into row views.
    pub fn render(&mut self, snapshot: &TaskSnapshot) -> Vec<RowView> {
        self.rows.retain(|task_id, _| snapshot.contains(*task_id));

        snapshot
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let row = self.row_mut(task.id);
                RowView {
                    key: task.id,
                    index,
                    title: row.display_title(task).to_string(),
                    done: task.done,
                    editing: row.is_editing(),
                    delete_enabled: row.can_delete(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::RowRegistry;
    use crate::view::row::RowMode;
    use crate::model::task::SequentialIds;
    use crate::store::task_store::{ConfirmChoice, TaskStore};

    #[test]
    fn render_assigns_index_based_test_ids() {
        let mut store = TaskStore::with_id_source(SequentialIds::starting_at(100));
        store.add_task("a").unwrap();
        store.add_task("b").unwrap();

        let rows = RowRegistry::new().render(&store.snapshot());
        assert_eq!(rows[1].key, 101);
        assert_eq!(rows[1].button_test_id(), "button-1");
        assert_eq!(rows[1].marker_test_id(), "marker-1");
    }

    #[test]
    fn render_drops_controllers_of_removed_tasks() {
        let mut store = TaskStore::with_id_source(SequentialIds::starting_at(1));
        let first = store.add_task("a").unwrap();
        let second = store.add_task("b").unwrap();
        let mut registry = RowRegistry::new();
        registry.render(&store.snapshot());
        assert!(registry.get(first).is_some());

        let pending = store.remove_task(first);
        store.resolve_removal(pending, ConfirmChoice::Confirm);
        registry.render(&store.snapshot());
        assert!(registry.get(first).is_none());
        assert!(registry.get(second).is_some());
    }

    #[test]
    fn forget_drops_only_the_given_row() {
        let mut registry = RowRegistry::new();
        registry.row_mut(1);
        registry.row_mut(2);

        let dropped = registry.forget(1).unwrap();
        assert_eq!(dropped.mode(), &RowMode::Viewing);
        assert!(registry.get(1).is_none());
        assert!(registry.get(2).is_some());
        assert!(registry.forget(1).is_none());
    }
}
