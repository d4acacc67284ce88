//! Per-frame geometry of the board, used to translate pointer positions
//! back into columns and cards.
//!
//! Rebuilt on every draw, so hit-testing always matches what is on screen.

use ratatui::layout::{Position, Rect};

use kanban_core::{Status, TaskId};

/// Rectangles recorded during the last draw.
#[derive(Debug, Default, Clone)]
pub(super) struct BoardLayout {
    columns: [Rect; 3],
    cards: Vec<(TaskId, Rect)>,
    dialog: Option<Rect>,
}

impl BoardLayout {
    /// Forget the previous frame.
    pub(super) fn reset(&mut self) {
        self.columns = [Rect::default(); 3];
        self.cards.clear();
        self.dialog = None;
    }

    pub(super) const fn set_column(&mut self, status: Status, rect: Rect) {
        self.columns[status.index()] = rect;
    }

    pub(super) fn push_card(&mut self, id: TaskId, rect: Rect) {
        self.cards.push((id, rect));
    }

    pub(super) const fn set_dialog(&mut self, rect: Rect) {
        self.dialog = Some(rect);
    }

    /// Column containing the position, if any.
    pub(super) fn column_at(&self, x: u16, y: u16) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| self.columns[status.index()].contains(Position::new(x, y)))
    }

    /// Card containing the position, if any.
    pub(super) fn card_at(&self, x: u16, y: u16) -> Option<TaskId> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(x, y)))
            .map(|(id, _)| *id)
    }

    /// Rectangle of one column as last drawn.
    pub(super) const fn column_rect(&self, status: Status) -> Rect {
        self.columns[status.index()]
    }

    /// Rectangle of one card as last drawn, if it was visible.
    pub(super) fn card_rect(&self, id: TaskId) -> Option<Rect> {
        self.cards
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, rect)| *rect)
    }

    /// True when the position falls inside the open dialog.
    pub(super) fn in_dialog(&self, x: u16, y: u16) -> bool {
        self.dialog
            .is_some_and(|rect| rect.contains(Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        let mut layout = BoardLayout::default();
        layout.set_column(Status::Todo, Rect::new(0, 0, 10, 20));
        layout.set_column(Status::InProgress, Rect::new(10, 0, 10, 20));
        layout.set_column(Status::Done, Rect::new(20, 0, 10, 20));
        layout.push_card(TaskId(1), Rect::new(1, 1, 8, 3));
        layout.push_card(TaskId(2), Rect::new(11, 1, 8, 3));
        layout
    }

    #[test]
    fn columns_resolve_by_position() {
        let layout = layout();
        assert_eq!(layout.column_at(5, 5), Some(Status::Todo));
        assert_eq!(layout.column_at(15, 5), Some(Status::InProgress));
        assert_eq!(layout.column_at(25, 19), Some(Status::Done));
        assert_eq!(layout.column_at(35, 5), None);
    }

    #[test]
    fn cards_resolve_by_position() {
        let layout = layout();
        assert_eq!(layout.card_at(2, 2), Some(TaskId(1)));
        assert_eq!(layout.card_at(12, 3), Some(TaskId(2)));
        // Inside the column but below every card.
        assert_eq!(layout.card_at(5, 10), None);
    }

    #[test]
    fn reset_clears_previous_frame() {
        let mut layout = layout();
        layout.set_dialog(Rect::new(5, 5, 10, 5));
        layout.reset();
        assert_eq!(layout.column_at(5, 5), None);
        assert_eq!(layout.card_at(2, 2), None);
        assert!(!layout.in_dialog(6, 6));
    }

    #[test]
    fn dialog_hit_test() {
        let mut layout = layout();
        layout.set_dialog(Rect::new(5, 5, 10, 5));
        assert!(layout.in_dialog(5, 5));
        assert!(layout.in_dialog(14, 9));
        assert!(!layout.in_dialog(15, 5));
        assert!(!layout.in_dialog(4, 4));
    }
}
