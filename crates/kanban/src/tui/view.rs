//! UI state shared between the event loop and rendering.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use kanban_app::{BoardProjection, BoardService, SnapshotStore};
use kanban_core::{Status, Task, TaskId};

use super::board::BoardLayout;
use super::constants::MESSAGE_TTL_SECS;
use super::drag::DragController;
use super::form::TaskForm;
use crate::config::KeyBindingsConfig;

/// Keyboard selection: one column and a row within it.
///
/// The row is clamped against the column's current length on every lookup,
/// so deletions and moves can never leave it pointing at nothing while the
/// column still has cards.
#[derive(Debug, Clone, Copy)]
pub(super) struct Cursor {
    pub(super) column: Status,
    pub(super) row: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            column: Status::Todo,
            row: 0,
        }
    }
}

impl Cursor {
    /// Card currently under the cursor, if its column has any.
    pub(super) fn selected(&self, projection: &BoardProjection) -> Option<TaskId> {
        let column = projection.column(self.column);
        let last = column.len().checked_sub(1)?;
        column.get(self.row.min(last)).copied()
    }

    pub(super) fn up(&mut self, projection: &BoardProjection) {
        let len = projection.column(self.column).len();
        self.row = self.row.min(len.saturating_sub(1)).saturating_sub(1);
    }

    pub(super) fn down(&mut self, projection: &BoardProjection) {
        let len = projection.column(self.column).len();
        self.row = (self.row + 1).min(len.saturating_sub(1));
    }

    pub(super) fn left(&mut self) {
        if let Some(column) = self.column.prev() {
            self.column = column;
            self.row = 0;
        }
    }

    pub(super) fn right(&mut self) {
        if let Some(column) = self.column.next() {
            self.column = column;
            self.row = 0;
        }
    }

    /// Point the cursor at a specific card.
    pub(super) fn select(&mut self, projection: &BoardProjection, id: TaskId) {
        if let Some(status) = projection.status_of(id) {
            self.column = status;
            self.row = projection
                .column(status)
                .iter()
                .position(|entry| *entry == id)
                .unwrap_or(0);
        }
    }
}

/// All state of the interactive board.
pub(super) struct Ui<S: SnapshotStore> {
    pub(super) service: BoardService<S>,
    pub(super) cursor: Cursor,
    /// Explicit dialog-open state; nothing is inferred from presentation.
    pub(super) form: Option<TaskForm>,
    pub(super) drag: DragController,
    pub(super) layout: BoardLayout,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) keys: KeyBindingsConfig,
}

impl<S: SnapshotStore> Ui<S> {
    pub(super) const MAIN_MIN_HEIGHT: u16 = 8;
    pub(super) const FOOTER_HEIGHT: u16 = 3;

    pub(super) fn new(service: BoardService<S>, keys: KeyBindingsConfig) -> Self {
        Self {
            service,
            cursor: Cursor::default(),
            form: None,
            drag: DragController::new(),
            layout: BoardLayout::default(),
            message: None,
            should_quit: false,
            keys,
        }
    }

    /// Card under the cursor.
    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.cursor.selected(self.service.projection())
    }

    /// Task under the cursor.
    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id().and_then(|id| self.service.find(id))
    }

    pub(super) fn draw(&mut self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.layout.reset();
        self.draw_board(f, chunks[0]);
        self.draw_footer(f, chunks[1]);
        if self.form.is_some() {
            self.draw_form_dialog(f);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    /// Expire the status message.
    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

/// Transient status-line message.
pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
