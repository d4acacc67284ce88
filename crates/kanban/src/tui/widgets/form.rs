use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use kanban_app::SnapshotStore;

use super::super::form::{FormField, FormMode};
use super::super::view::Ui;

impl<S: SnapshotStore> Ui<S> {
    pub(in crate::tui) fn draw_form_dialog(&mut self, f: &mut Frame<'_>) {
        let area = f.area();

        let mut popup_width = (area.width * 3) / 5;
        popup_width = popup_width.max(40).min(area.width);
        let popup_height = 9.min(area.height);
        let popup_x = area.width.saturating_sub(popup_width) / 2;
        let popup_y = area.height.saturating_sub(popup_height) / 2;
        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        {
            let Some(form) = &self.form else {
                return;
            };

            let title = match form.mode {
                FormMode::Create => "New Task".to_owned(),
                FormMode::Edit(id) => format!("Edit Task {id}"),
            };
            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            f.render_widget(Clear, popup_area);
            let inner = block.inner(popup_area);
            f.render_widget(block, popup_area);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(inner);

            let field_line = |label: &str, value: &str, focused: bool| {
                let style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let marker = if focused { "_" } else { "" };
                Line::from(vec![
                    Span::styled(format!("{label:<13}"), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{value}{marker}"), style),
                ])
            };

            f.render_widget(
                Paragraph::new(field_line(
                    "Title",
                    &form.title,
                    form.focus == FormField::Title,
                )),
                rows[0],
            );
            f.render_widget(
                Paragraph::new(field_line(
                    "Description",
                    &form.description,
                    form.focus == FormField::Description,
                )),
                rows[1],
            );
            f.render_widget(
                Paragraph::new(field_line(
                    "Priority",
                    &format!("< {} >", form.priority.label()),
                    form.focus == FormField::Priority,
                )),
                rows[2],
            );
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Enter save · Tab next field · Space cycles priority · Esc cancel",
                    Style::default().fg(Color::DarkGray),
                ))),
                rows[4],
            );
        }

        self.layout.set_dialog(popup_area);
    }
}
