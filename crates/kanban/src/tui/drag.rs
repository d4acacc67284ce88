//! The drag-and-drop state machine.
//!
//! At most one drag session exists at a time: the controller is either
//! `Idle` or `Dragging` one task, and every terminating gesture (drop or
//! release outside a column) returns it to `Idle` unconditionally so a
//! stuck session can never block future drags. The hovered column is purely
//! cosmetic and has no state-machine effect.

use kanban_core::{Status, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging(TaskId),
}

/// Tracks the one card currently being relocated by the pointer.
#[derive(Debug)]
pub(super) struct DragController {
    state: DragState,
    hover: Option<Status>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub(super) const fn new() -> Self {
        Self {
            state: DragState::Idle,
            hover: None,
        }
    }

    /// Start a session for `task`. Under the single-pointer interaction
    /// model a press cannot arrive mid-drag, so an existing session is
    /// simply replaced.
    pub(super) fn begin(&mut self, task: TaskId) {
        self.state = DragState::Dragging(task);
        self.hover = None;
    }

    /// The task being dragged, if a session is active.
    pub(super) const fn dragging(&self) -> Option<TaskId> {
        match self.state {
            DragState::Dragging(task) => Some(task),
            DragState::Idle => None,
        }
    }

    /// True while `task` is the active session.
    pub(super) fn is_dragging(&self, task: TaskId) -> bool {
        self.dragging() == Some(task)
    }

    /// Update the cosmetic drag-over column. Ignored while idle.
    pub(super) const fn set_hover(&mut self, column: Option<Status>) {
        if matches!(self.state, DragState::Dragging(_)) {
            self.hover = column;
        }
    }

    /// Column currently highlighted as a drop target.
    pub(super) const fn hover(&self) -> Option<Status> {
        self.hover
    }

    /// Terminate the session and return its task, clearing all flags.
    /// `None` when no session was active.
    pub(super) const fn release(&mut self) -> Option<TaskId> {
        let task = self.dragging();
        self.state = DragState::Idle;
        self.hover = None;
        task
    }
}
