//! Tuning knobs for the interactive board.

/// Event-loop tick interval in milliseconds.
pub const TICK_RATE_MS: u64 = 200;

/// How long a status message stays visible, in seconds.
pub const MESSAGE_TTL_SECS: u64 = 4;

/// Widest a card title may render before truncation, in graphemes.
pub const CARD_TEXT_MAX_GRAPHEMES: usize = 64;
