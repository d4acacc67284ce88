//! Sample tasks shown on a first run (or when the snapshot is unusable).

use kanban_core::{Board, Priority, Status};

/// Board pre-populated with the four sample tasks, ids 1 through 4.
#[must_use]
pub fn seed_board() -> Board {
    let mut board = Board::new();
    board.create(
        "Design new landing page",
        "Create wireframes and mockups for the new product landing page",
        Priority::High,
        Status::Todo,
    );
    board.create(
        "Implement user authentication",
        "Set up login/logout functionality with JWT tokens",
        Priority::Medium,
        Status::InProgress,
    );
    board.create(
        "Write unit tests",
        "Add comprehensive test coverage for the API endpoints",
        Priority::Medium,
        Status::Todo,
    );
    board.create(
        "Deploy to staging",
        "Push latest changes to staging environment for testing",
        Priority::Low,
        Status::Done,
    );
    board
}
