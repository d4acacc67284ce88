use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::id::TaskId;

/// Urgency tag displayed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire value used in the persisted snapshot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Next priority in the selector cycle, wrapping around.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a priority string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown priority '{0}', expected low, medium, or high")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParsePriorityError(other.to_owned())),
        }
    }
}

/// Column a task currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started.
    Todo,
    /// Actively being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl Status {
    /// The three board columns, left to right.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire value used in the persisted snapshot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Column to the left, if any.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }

    /// Position of this column on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status '{0}', expected todo, in-progress, or done")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Session-unique identifier; never changes once assigned.
    pub id: TaskId,
    /// Required, non-empty.
    pub title: String,
    /// Optional free text; empty means "no description".
    #[serde(default)]
    pub description: String,
    /// Urgency tag.
    pub priority: Priority,
    /// Column the card sits in.
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: TaskId(7),
            title: "Fix bug".into(),
            description: "Repro in #42".into(),
            priority: Priority::High,
            status: Status::InProgress,
        }
    }

    #[test]
    fn status_wire_values_match_snapshot_format() {
        for (status, expected) in Status::ALL.into_iter().zip(["todo", "in-progress", "done"]) {
            assert_eq!(status.as_str(), expected);
            assert_eq!(status.to_string(), expected);
            assert_eq!(expected.parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn priority_wire_values_match_snapshot_format() {
        for (priority, expected) in Priority::ALL.into_iter().zip(["low", "medium", "high"]) {
            assert_eq!(priority.as_str(), expected);
            assert_eq!(expected.parse::<Priority>(), Ok(priority));
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert!("doing".parse::<Status>().is_err());
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn task_serializes_with_flat_keys() {
        let json = match serde_json::to_value(task()) {
            Ok(json) => json,
            Err(err) => panic!("must serialize task: {err}"),
        };
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Fix bug");
        assert_eq!(json["description"], "Repro in #42");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "in-progress");
    }

    #[test]
    fn task_deserializes_without_description() {
        let parsed: Task = match serde_json::from_str(
            r#"{"id":1,"title":"Ship it","priority":"low","status":"done"}"#,
        ) {
            Ok(parsed) => parsed,
            Err(err) => panic!("must deserialize task: {err}"),
        };
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.status, Status::Done);
    }

    #[test]
    fn column_order_is_stable() {
        assert_eq!(Status::Todo.next(), Some(Status::InProgress));
        assert_eq!(Status::Done.next(), None);
        assert_eq!(Status::Done.prev(), Some(Status::InProgress));
        assert_eq!(Status::Todo.prev(), None);
        for (idx, status) in Status::ALL.into_iter().enumerate() {
            assert_eq!(status.index(), idx);
        }
    }
}
