//! Domain model for the kanban board: tasks, identifiers, and the
//! in-memory board that owns them.
//!
//! Nothing in this crate performs I/O. Persistence and rendering live in the
//! application layer, which sequences every mutation as
//! mutate → project → persist.

pub mod board;
pub mod id;
pub mod task;

pub use board::{Board, TaskEdit};
pub use id::{IdAllocator, TaskId};
pub use task::{ParsePriorityError, ParseStatusError, Priority, Status, Task};
