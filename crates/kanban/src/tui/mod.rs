//! Interactive board: terminal lifecycle and the event loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use kanban_app::{BoardService, SnapshotStore};

use crate::config::KeyBindingsConfig;

mod board;
pub mod constants;
mod drag;
mod form;
mod handlers;
mod view;
mod widgets;

use self::constants::TICK_RATE_MS;
use self::view::Ui;

/// Launch the interactive board.
pub fn run<S: SnapshotStore>(service: BoardService<S>, keybindings: KeyBindingsConfig) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, service, keybindings)
    });

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop<S: SnapshotStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    service: BoardService<S>,
    keybindings: KeyBindingsConfig,
) -> Result<()> {
    let mut ui = Ui::new(service, keybindings);

    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => ui.handle_key(key),
                CrosstermEvent::Mouse(mouse) => ui.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
