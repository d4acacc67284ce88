//! Modal task form used for both creation and in-place editing.
//!
//! The form being open is explicit state held by the UI (`Option<TaskForm>`),
//! never inferred from what happens to be on screen.

use kanban_core::{Priority, Task, TaskEdit, TaskId};

/// What submitting the form should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormMode {
    /// Create a new task in the todo column.
    Create,
    /// Replace fields of an existing task.
    Edit(TaskId),
}

/// Field currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormField {
    Title,
    Description,
    Priority,
}

/// State of the open dialog.
#[derive(Debug, Clone)]
pub(super) struct TaskForm {
    pub(super) mode: FormMode,
    pub(super) title: String,
    pub(super) description: String,
    pub(super) priority: Priority,
    pub(super) focus: FormField,
}

impl TaskForm {
    /// Blank form for a new task.
    pub(super) const fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            focus: FormField::Title,
        }
    }

    /// Form pre-filled from an existing task.
    pub(super) fn edit(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            focus: FormField::Title,
        }
    }

    pub(super) const fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Title,
        };
    }

    pub(super) const fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
        };
    }

    /// Feed one typed character into the focused field. The priority field
    /// cycles on space instead of accepting text.
    pub(super) fn input(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Priority => {
                if c == ' ' {
                    self.priority = self.priority.cycled();
                }
            }
        }
    }

    pub(super) fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Priority => {}
        }
    }

    pub(super) const fn cycle_priority(&mut self) {
        self.priority = self.priority.cycled();
    }

    /// Edit payload for submission; blank fields are omitted so the
    /// existing value survives.
    pub(super) fn as_edit(&self) -> TaskEdit {
        TaskEdit {
            title: (!self.title.trim().is_empty()).then(|| self.title.clone()),
            description: Some(self.description.clone()),
            priority: Some(self.priority),
        }
    }
}
