use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use kanban_app::SnapshotStore;
use kanban_core::{Status, TaskId};

use super::super::constants::CARD_TEXT_MAX_GRAPHEMES;
use super::super::view::Ui;
use super::util::{priority_color, truncate_with_ellipsis};

impl<S: SnapshotStore> Ui<S> {
    pub(in crate::tui) fn draw_board(&mut self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        for (status, chunk) in Status::ALL.into_iter().zip(chunks.iter()) {
            self.draw_column(f, status, *chunk);
        }
    }

    fn draw_column(&mut self, f: &mut Frame<'_>, status: Status, area: Rect) {
        self.layout.set_column(status, area);

        let count = self.service.projection().count(status);
        let hovered = self.drag.hover() == Some(status);
        let border_style = if hovered {
            // Drag-over highlight: cosmetic only.
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if self.cursor.column == status {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .title(format!("{} ({count})", status.label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let ids: Vec<TaskId> = self.service.projection().column(status).to_vec();
        let selected = self.selected_task_id().filter(|_| self.cursor.column == status);

        let mut y = inner.y;
        for id in ids {
            let Some(task) = self.service.find(id) else {
                continue;
            };

            let text_width = usize::from(inner.width)
                .saturating_sub(1)
                .min(CARD_TEXT_MAX_GRAPHEMES);
            let mut lines = vec![
                Line::from(Span::styled(
                    truncate_with_ellipsis(&task.title, text_width).into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("#{} {}", task.id, task.priority.label()),
                    Style::default().fg(priority_color(task.priority)),
                )),
            ];
            if !task.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    truncate_with_ellipsis(&task.description, text_width).into_owned(),
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            if y.saturating_add(height) > inner.y.saturating_add(inner.height) {
                break;
            }

            let mut style = Style::default();
            if selected == Some(id) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if self.drag.is_dragging(id) {
                // Being-moved flag: cosmetic only.
                style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
            }

            let rect = Rect::new(inner.x, y, inner.width, height);
            f.render_widget(Paragraph::new(lines).style(style), rect);
            self.layout.push_card(id, rect);

            y = y.saturating_add(height + 1);
        }
    }

    pub(in crate::tui) fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let line = self.message.as_ref().map_or_else(
            || {
                Line::from(Span::styled(
                    "n new · e edit · d delete · Enter move right · drag cards with the mouse · q quit",
                    Style::default().fg(Color::DarkGray),
                ))
            },
            |message| Line::from(Span::styled(message.text.clone(), message.style())),
        );
        f.render_widget(Paragraph::new(line), inner);
    }
}
