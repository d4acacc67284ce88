//! Error types for snapshot store operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the snapshot file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the task collection to JSON.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
