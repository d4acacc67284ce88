//! Non-interactive command execution over the shared command surface.

use anyhow::Result;

use kanban_app::{BoardService, NewTask, SnapshotStore};
use kanban_core::Task;

use crate::Command;

/// Execute one CLI command against the loaded board.
pub fn run<S: SnapshotStore>(cmd: Command, mut service: BoardService<S>) -> Result<()> {
    match cmd {
        // The board subcommand is dispatched before reaching here.
        Command::Board => Ok(()),

        Command::Add {
            title,
            description,
            priority,
        } => {
            let id = service.create(NewTask {
                title,
                description,
                priority,
            })?;
            println!("created task {id}");
            Ok(())
        }

        Command::Ls { status } => {
            for task in service.board().tasks() {
                if status.is_none_or(|wanted| task.status == wanted) {
                    println!("{}", describe(task));
                }
            }
            Ok(())
        }

        Command::Mv { task, to } => {
            if service.move_task(task, to) {
                println!("moved task {task} to {to}");
            } else {
                println!("no task with id {task}");
            }
            Ok(())
        }

        Command::Rm { task } => {
            if service.delete(task) {
                println!("deleted task {task}");
            } else {
                println!("no task with id {task}");
            }
            Ok(())
        }
    }
}

fn describe(task: &Task) -> String {
    format!(
        "#{:<4} [{}] {} ({})",
        task.id,
        task.status,
        task.title,
        task.priority
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_core::{Priority, Status, TaskId};

    #[test]
    fn describe_lists_id_status_title_and_priority() {
        let task = Task {
            id: TaskId(12),
            title: "Write docs".into(),
            description: String::new(),
            priority: Priority::Low,
            status: Status::InProgress,
        };
        assert_eq!(describe(&task), "#12   [in-progress] Write docs (low)");
    }
}
