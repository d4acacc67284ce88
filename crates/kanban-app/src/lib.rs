//! Application layer for the kanban board.
//!
//! This crate provides the snapshot-store abstraction, the board projection,
//! and the command surface shared by the CLI and TUI.

pub mod projection;
pub mod seed;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use projection::BoardProjection;
pub use seed::seed_board;
pub use service::{BoardService, CommandError, NewTask};
pub use store::SnapshotStore;
