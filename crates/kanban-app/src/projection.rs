//! Derived visual grouping of the board.
//!
//! The projection keeps exactly one entry per task, keyed by id and placed
//! under the column matching its status, so the renderer never re-derives
//! layout from anything but repository state. It supports a full rebuild
//! (startup) and incremental single-task updates (every other operation).

use std::collections::HashMap;

use kanban_core::{Board, Status, Task, TaskId};

/// Per-column card ordering plus an id index for O(1) incremental updates.
#[derive(Debug, Default)]
pub struct BoardProjection {
    columns: [Vec<TaskId>; 3],
    index: HashMap<TaskId, Status>,
}

impl BoardProjection {
    /// Empty projection; all counts are 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full mode: rebuild every column from repository state.
    pub fn rebuild(&mut self, board: &Board) {
        for column in &mut self.columns {
            column.clear();
        }
        self.index.clear();
        for task in board.tasks() {
            self.push(task.id, task.status);
        }
    }

    /// Incremental mode: append one new card under its status column.
    pub fn insert(&mut self, task: &Task) {
        if self.index.contains_key(&task.id) {
            return;
        }
        self.push(task.id, task.status);
    }

    /// Incremental mode: remove one card. False when the id is unknown.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(status) = self.index.remove(&id) else {
            return false;
        };
        self.columns[status.index()].retain(|entry| *entry != id);
        true
    }

    /// Incremental mode: move one card to another column, appended at the
    /// end of its new column. False when the id is unknown; moving a card
    /// to its current column is a no-op.
    pub fn relocate(&mut self, id: TaskId, status: Status) -> bool {
        let Some(current) = self.index.get(&id).copied() else {
            return false;
        };
        if current == status {
            return true;
        }
        self.columns[current.index()].retain(|entry| *entry != id);
        self.push(id, status);
        true
    }

    /// Ordered card ids of one column.
    #[must_use]
    pub fn column(&self, status: Status) -> &[TaskId] {
        &self.columns[status.index()]
    }

    /// Displayed count of one column.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.columns[status.index()].len()
    }

    /// Column a card is currently projected under.
    #[must_use]
    pub fn status_of(&self, id: TaskId) -> Option<Status> {
        self.index.get(&id).copied()
    }

    /// Total number of projected cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.index.len()
    }

    fn push(&mut self, id: TaskId, status: Status) {
        self.columns[status.index()].push(id);
        self.index.insert(id, status);
    }
}
