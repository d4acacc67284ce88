//! Storage abstraction consumed by the command surface.

use anyhow::Error;
use kanban_core::Task;
use kanban_store_fs::{FsStore, StoreError};

/// Minimal snapshot storage required by [`BoardService`].
///
/// The store holds one opaque blob: the serialized task collection. Both
/// operations cover the whole collection; there is no per-task addressing.
///
/// [`BoardService`]: crate::service::BoardService
pub trait SnapshotStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Read the persisted task collection.
    ///
    /// `Ok(None)` means "no usable snapshot": either nothing was ever
    /// written or the stored value did not parse.
    ///
    /// # Errors
    /// Returns a store-specific error when the medium cannot be read.
    fn load(&self) -> Result<Option<Vec<Task>>, Self::Error>;

    /// Replace the persisted snapshot with the full collection.
    ///
    /// # Errors
    /// Returns a store-specific error when the write is rejected.
    fn save(&self, tasks: &[Task]) -> Result<(), Self::Error>;
}

impl SnapshotStore for FsStore {
    type Error = StoreError;

    fn load(&self) -> Result<Option<Vec<Task>>, Self::Error> {
        self.load()
    }

    fn save(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        self.save(tasks)
    }
}
