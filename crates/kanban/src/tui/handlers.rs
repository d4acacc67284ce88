//! Gesture dispatch: keyboard and mouse events mapped onto the cursor, the
//! form, the drag controller, and the command surface.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use kanban_app::{CommandError, NewTask, SnapshotStore};

use super::form::{FormField, FormMode, TaskForm};
use super::view::Ui;
use crate::config::Action;

impl<S: SnapshotStore> Ui<S> {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.form.is_some() {
            self.handle_form_key(key);
            return;
        }
        self.handle_board_key(key);
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        if self.keys.matches(Action::Quit, &key) {
            self.should_quit = true;
            return;
        }

        if self.keys.matches(Action::NewTask, &key) {
            self.form = Some(TaskForm::create());
            return;
        }

        if self.keys.matches(Action::EditTask, &key) {
            match self.selected_task().map(TaskForm::edit) {
                Some(form) => self.form = Some(form),
                None => self.error("no card selected"),
            }
            return;
        }

        if self.keys.matches(Action::DeleteTask, &key) {
            match self.selected_task_id() {
                Some(id) => {
                    if self.service.delete(id) {
                        self.info(format!("deleted task {id}"));
                    }
                }
                None => self.error("no card selected"),
            }
            return;
        }

        if self.keys.matches(Action::MoveCard, &key) {
            self.move_selected_right();
            return;
        }

        if self.keys.matches(Action::Up, &key) {
            self.cursor.up(self.service.projection());
            return;
        }
        if self.keys.matches(Action::Down, &key) {
            self.cursor.down(self.service.projection());
            return;
        }
        if self.keys.matches(Action::Left, &key) {
            self.cursor.left();
            return;
        }
        if self.keys.matches(Action::Right, &key) {
            self.cursor.right();
        }
    }

    fn move_selected_right(&mut self) {
        let Some(id) = self.selected_task_id() else {
            self.error("no card selected");
            return;
        };
        let Some(task) = self.service.find(id) else {
            return;
        };
        let Some(next) = task.status.next() else {
            self.info("card is already done");
            return;
        };
        if self.service.move_task(id, next) {
            self.cursor.select(self.service.projection(), id);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = &mut self.form {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = &mut self.form {
                    form.focus_prev();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(form) = &mut self.form
                    && form.focus == FormField::Priority
                {
                    form.cycle_priority();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = &mut self.form {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = &mut self.form {
                    form.input(c);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        match form.mode {
            FormMode::Create => match self.service.create(NewTask {
                title: form.title,
                description: form.description,
                priority: form.priority,
            }) {
                Ok(id) => {
                    self.form = None;
                    self.cursor.select(self.service.projection(), id);
                    self.info(format!("created task {id}"));
                }
                // The form stays open so the input is not lost.
                Err(CommandError::EmptyTitle) => self.error("title must not be empty"),
            },
            FormMode::Edit(id) => {
                let updated = self.service.edit(id, form.as_edit());
                self.form = None;
                if updated {
                    self.info(format!("updated task {id}"));
                } else {
                    self.error(format!("task {id} no longer exists"));
                }
            }
        }
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                let hover = self.layout.column_at(mouse.column, mouse.row);
                self.drag.set_hover(hover);
            }
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_press(&mut self, x: u16, y: u16) {
        if self.form.is_some() {
            // Clicking outside the dialog dismisses it.
            if !self.layout.in_dialog(x, y) {
                self.form = None;
            }
            return;
        }
        if let Some(id) = self.layout.card_at(x, y) {
            self.cursor.select(self.service.projection(), id);
            self.drag.begin(id);
        }
    }

    fn handle_release(&mut self, x: u16, y: u16) {
        let target = self.layout.column_at(x, y);
        // The session ends here regardless of where the pointer is.
        let Some(task) = self.drag.release() else {
            return;
        };
        if let Some(column) = target
            && self.service.move_task(task, column)
        {
            self.cursor.select(self.service.projection(), task);
        }
    }
}
