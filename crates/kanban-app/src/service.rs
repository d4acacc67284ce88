//! Command surface: every mutation runs mutate → project → persist as one
//! unit, so no intermediate state is ever persisted without being projected
//! or vice versa.

use anyhow::Error;
use kanban_core::{Board, Priority, Status, Task, TaskEdit, TaskId};
use thiserror::Error as ThisError;
use tracing::{info, warn};

use crate::projection::BoardProjection;
use crate::seed::seed_board;
use crate::store::SnapshotStore;

/// Input collected from the new task form.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Required; rejected when blank.
    pub title: String,
    /// Optional free text.
    pub description: String,
    /// Urgency tag.
    pub priority: Priority,
}

/// Rejection raised before any mutation takes place.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    /// A creation request arrived with a blank title.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// The board, its projection, and the snapshot store, mutated in lockstep.
///
/// Persistence is fire-and-forget: a rejected write is logged and dropped,
/// and the in-memory state stays authoritative for the session.
pub struct BoardService<S: SnapshotStore> {
    board: Board,
    projection: BoardProjection,
    store: S,
}

impl<S: SnapshotStore> BoardService<S> {
    /// Restore the board from `store`, degrading to the seed board when no
    /// usable snapshot exists, then run a full projection rebuild.
    ///
    /// A freshly seeded board is persisted immediately so the next run sees
    /// the same four tasks.
    pub fn load(store: S) -> Self {
        let restored = match store.load() {
            Ok(found) => found,
            Err(err) => {
                let err: Error = err.into();
                warn!(%err, "snapshot load failed, starting from seed data");
                None
            }
        };

        let (board, seeded) = match restored {
            Some(tasks) => (Board::from_tasks(tasks), false),
            None => (seed_board(), true),
        };

        let mut service = Self {
            board,
            projection: BoardProjection::new(),
            store,
        };
        service.projection.rebuild(&service.board);
        if seeded {
            info!("seeded board with sample tasks");
            service.persist();
        }
        service
    }

    /// Create a task in the `todo` column and return its id.
    ///
    /// # Errors
    /// Returns [`CommandError::EmptyTitle`] for a blank title; in that case
    /// nothing is mutated, no id is consumed, and nothing is written.
    pub fn create(&mut self, input: NewTask) -> Result<TaskId, CommandError> {
        if input.title.trim().is_empty() {
            return Err(CommandError::EmptyTitle);
        }
        let task = self
            .board
            .create(input.title, input.description, input.priority, Status::Todo)
            .clone();
        self.projection.insert(&task);
        self.persist();
        Ok(task.id)
    }

    /// Apply a per-field edit. False when the id is unknown.
    ///
    /// Creation is the only empty-title rejection path; an edit submitting
    /// a blank title keeps the previous title so the non-empty invariant
    /// survives.
    pub fn edit(&mut self, id: TaskId, mut edit: TaskEdit) -> bool {
        if edit.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            edit.title = None;
        }
        if !self.board.edit(id, edit) {
            return false;
        }
        // Content-only change: the card stays in its column.
        self.persist();
        true
    }

    /// Move a task to `status`. False (and no write) when the id is
    /// unknown; moving to the current column is an idempotent success.
    pub fn move_task(&mut self, id: TaskId, status: Status) -> bool {
        if !self.board.set_status(id, status) {
            return false;
        }
        self.projection.relocate(id, status);
        self.persist();
        true
    }

    /// Delete a task. False (and no write) when the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if !self.board.delete(id) {
            return false;
        }
        self.projection.remove(id);
        self.persist();
        true
    }

    /// Look up a task by id.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.board.find(id)
    }

    /// The authoritative task collection.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The derived column grouping.
    #[must_use]
    pub const fn projection(&self) -> &BoardProjection {
        &self.projection
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(self.board.tasks()) {
            let err: Error = err.into();
            warn!(%err, "snapshot save failed, keeping in-memory state");
        }
    }
}
