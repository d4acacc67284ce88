//! Filesystem-backed snapshot storage for the kanban board.
//!
//! The whole task collection is written as one JSON array of
//! `{id, title, description, priority, status}` objects under a single
//! well-known path. There is no version field; format changes are breaking.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use kanban_core::Task;
use tracing::{debug, warn};

mod error;

pub use error::StoreError;

/// Snapshot store backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FsStore {
    path: PathBuf,
}

impl FsStore {
    /// Store reading and writing `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full task collection, creating parent directories on
    /// demand.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the file cannot be written or the
    /// collection cannot be serialized.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, body)?;
        debug!(path = %self.path.display(), count = tasks.len(), "snapshot saved");
        Ok(())
    }

    /// Read the persisted task collection.
    ///
    /// Returns `Ok(None)` when no snapshot exists yet (first run) or when
    /// the stored text does not parse; a corrupt snapshot degrades silently
    /// to "no prior data" rather than surfacing an error.
    ///
    /// # Errors
    /// Returns [`StoreError`] only for I/O failures other than a missing
    /// file.
    pub fn load(&self) -> Result<Option<Vec<Task>>, StoreError> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Vec<Task>>(&body) {
            Ok(tasks) => {
                debug!(path = %self.path.display(), count = tasks.len(), "snapshot loaded");
                Ok(Some(tasks))
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "snapshot unreadable, treating as empty");
                Ok(None)
            }
        }
    }
}
