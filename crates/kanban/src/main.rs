//! CLI entry point for the kanban board.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use kanban_app::BoardService;
use kanban_core::{Priority, Status, TaskId};
use kanban_store_fs::FsStore;

use config::Config;

mod commands;
mod config;
mod tui;

/// A kanban task board in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "kanban",
    version,
    about = "kanban: a task board with todo / in-progress / done columns"
)]
struct Cli {
    /// Path to the snapshot file (defaults to the platform data dir).
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive board (default).
    Board,

    /// Create a task in the todo column.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },

    /// List tasks, optionally restricted to one column.
    Ls {
        #[arg(long)]
        status: Option<Status>,
    },

    /// Move a task to another column.
    Mv {
        #[arg(long)]
        task: TaskId,
        #[arg(long)]
        to: Status,
    },

    /// Delete a task.
    Rm {
        #[arg(long)]
        task: TaskId,
    },
}

fn main() -> Result<()> {
    let Cli { store, cmd } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Board);

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let config = Config::load(None)?;
    let store = FsStore::new(store.unwrap_or_else(|| config.storage_path()));
    let service = BoardService::load(store);

    match cmd {
        Command::Board => tui::run(service, config.keybindings),
        other => commands::run(other, service),
    }
}

/// The TUI owns the terminal; log lines would corrupt the screen.
const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Board)
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "kanban",
            "add",
            "--title",
            "Fix bug",
            "--priority",
            "high",
        ]);

        match cli.cmd {
            Some(Command::Add {
                title,
                description,
                priority,
            }) => {
                assert_eq!(title, "Fix bug");
                assert_eq!(description, "");
                assert_eq!(priority, Priority::High);
            }
            other => panic!("expected add command, got {other:?}"),
        }
    }

    #[test]
    fn parse_mv_command() {
        let cli = Cli::parse_from(["kanban", "mv", "--task", "3", "--to", "in-progress"]);
        match cli.cmd {
            Some(Command::Mv { task, to }) => {
                assert_eq!(task, TaskId(3));
                assert_eq!(to, Status::InProgress);
            }
            other => panic!("expected mv command, got {other:?}"),
        }
    }

    #[test]
    fn parse_store_override() {
        let cli = Cli::parse_from(["kanban", "--store", "/tmp/board.json", "ls"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/board.json")));
    }

    #[test]
    fn missing_subcommand_defaults_to_board() {
        let cli = Cli::parse_from(["kanban"]);
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn invalid_status_is_rejected() {
        assert!(Cli::try_parse_from(["kanban", "mv", "--task", "1", "--to", "doing"]).is_err());
    }

    #[test]
    fn skips_tracing_for_the_board() {
        assert!(!should_install_tracing(&Command::Board));
        assert!(should_install_tracing(&Command::Ls { status: None }));
    }
}
