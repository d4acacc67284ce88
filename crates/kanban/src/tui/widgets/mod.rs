//! Rendering of the board columns, cards, footer, and the task dialog.

mod columns;
mod form;
pub(super) mod util;
