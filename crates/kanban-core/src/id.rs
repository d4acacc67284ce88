use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a task.
///
/// Unique and immutable once assigned; never reused within a session.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Issues strictly increasing task identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Allocator for a fresh board; the first id issued is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Resume allocation above the largest restored id so a reloaded session
    /// never collides with fresh creations.
    #[must_use]
    pub fn seeded(ids: impl IntoIterator<Item = TaskId>) -> Self {
        let max = ids.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Issue the next identifier, strictly greater than all previous ones.
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`allocate`](Self::allocate) would return.
    #[must_use]
    pub const fn peek(&self) -> TaskId {
        TaskId(self.next)
    }
}
