use crate::id::{IdAllocator, TaskId};
use crate::task::{Priority, Status, Task};

/// The authoritative in-memory task collection.
///
/// Tasks are kept in insertion order so persisted snapshots round-trip
/// stably; board layout derives from each task's status, not from this
/// order. The board owns the identifier allocator and nothing else: it never
/// touches storage or rendering, the command surface sequences those.
#[derive(Debug, Default)]
pub struct Board {
    tasks: Vec<Task>,
    alloc: IdAllocator,
}

/// Per-field edit applied to an existing task.
///
/// `None` leaves the field untouched; id and status are never part of an
/// edit (status moves go through [`Board::set_status`]).
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
}

impl Board {
    /// Empty board; the first created task gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from a restored snapshot.
    ///
    /// Restored ids keep their values and the allocator resumes above the
    /// largest of them.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let alloc = IdAllocator::seeded(tasks.iter().map(|task| task.id));
        Self { tasks, alloc }
    }

    /// Allocate an id, append a new task, and return it.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        status: Status,
    ) -> &Task {
        let task = Task {
            id: self.alloc.allocate(),
            title: title.into(),
            description: description.into(),
            priority,
            status,
        };
        self.tasks.push(task);
        // Just pushed, so the collection is non-empty.
        &self.tasks[self.tasks.len() - 1]
    }

    /// Look up a task by id.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Move a task to `status`. Returns false (and changes nothing) when the
    /// id is unknown. Setting the current status again is a visible no-op.
    pub fn set_status(&mut self, id: TaskId, status: Status) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Apply a per-field edit. Returns false when the id is unknown.
    pub fn edit(&mut self, id: TaskId, edit: TaskEdit) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        if let Some(title) = edit.title {
            task.title = title;
        }
        if let Some(description) = edit.description {
            task.description = description;
        }
        if let Some(priority) = edit.priority {
            task.priority = priority;
        }
        true
    }

    /// Remove a task. Returns false when the id is unknown; a second delete
    /// of the same id is a failed no-op.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next creation would receive. Mutations that fail validation
    /// must leave this unchanged.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.alloc.peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(titles: &[&str]) -> Board {
        let mut board = Board::new();
        for title in titles {
            board.create(*title, "", Priority::Medium, Status::Todo);
        }
        board
    }

    #[test]
    fn created_tasks_get_strictly_increasing_ids() {
        let mut board = Board::new();
        let mut previous = board.create("a", "", Priority::Low, Status::Todo).id;
        for title in ["b", "c", "d"] {
            let id = board.create(title, "", Priority::Low, Status::Todo).id;
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn restored_board_allocates_above_existing_ids() {
        let tasks = vec![
            Task {
                id: TaskId(2),
                title: "old".into(),
                description: String::new(),
                priority: Priority::Low,
                status: Status::Done,
            },
            Task {
                id: TaskId(9),
                title: "older".into(),
                description: String::new(),
                priority: Priority::High,
                status: Status::Todo,
            },
        ];
        let mut board = Board::from_tasks(tasks);
        assert_eq!(board.create("new", "", Priority::Medium, Status::Todo).id, TaskId(10));
    }

    #[test]
    fn set_status_updates_find() {
        let mut board = board_with(&["a"]);
        let id = board.tasks()[0].id;
        assert!(board.set_status(id, Status::Done));
        assert_eq!(board.find(id).map(|task| task.status), Some(Status::Done));
    }

    #[test]
    fn set_status_is_idempotent() {
        let mut board = board_with(&["a"]);
        let id = board.tasks()[0].id;
        assert!(board.set_status(id, Status::InProgress));
        assert!(board.set_status(id, Status::InProgress));
        assert_eq!(board.find(id).map(|task| task.status), Some(Status::InProgress));
    }

    #[test]
    fn set_status_on_unknown_id_changes_nothing() {
        let mut board = board_with(&["a", "b"]);
        let snapshot: Vec<Task> = board.tasks().to_vec();
        assert!(!board.set_status(TaskId(99), Status::Done));
        assert_eq!(board.tasks(), snapshot.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one_and_fails_the_second_time() {
        let mut board = board_with(&["a", "b", "c"]);
        let id = board.tasks()[1].id;
        assert!(board.delete(id));
        assert_eq!(board.len(), 2);
        assert!(board.find(id).is_none());
        let snapshot: Vec<Task> = board.tasks().to_vec();
        assert!(!board.delete(id));
        assert_eq!(board.tasks(), snapshot.as_slice());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut board = board_with(&["a", "b"]);
        let last = board.tasks()[1].id;
        assert!(board.delete(last));
        let fresh = board.create("c", "", Priority::Low, Status::Todo).id;
        assert!(fresh > last);
    }

    #[test]
    fn edit_touches_only_requested_fields() {
        let mut board = Board::new();
        let id = board.create("title", "desc", Priority::Low, Status::Todo).id;
        assert!(board.edit(
            id,
            TaskEdit {
                priority: Some(Priority::High),
                ..TaskEdit::default()
            },
        ));
        let task = board.find(id).map(Task::clone);
        let task = match task {
            Some(task) => task,
            None => panic!("task must exist after edit"),
        };
        assert_eq!(task.title, "title");
        assert_eq!(task.description, "desc");
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn edit_on_unknown_id_returns_false() {
        let mut board = board_with(&["a"]);
        assert!(!board.edit(TaskId(42), TaskEdit::default()));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let board = board_with(&["first", "second", "third"]);
        let titles: Vec<&str> = board.tasks().iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }
}
