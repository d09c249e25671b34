//! User-facing text for operation outcomes.

use crate::ops::{RemoveOutcome, ToggleOutcome};
use crate::task::{Task, TaskId};

pub fn added(task: &Task) -> String {
    format!("Task added: {}", task.description)
}

/// Header plus one `<id>. <description> - <status>` line per task.
pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }
    let mut out = String::from("Todo List:");
    for task in tasks {
        out.push('\n');
        out.push_str(&task_line(task));
    }
    out
}

pub fn task_line(task: &Task) -> String {
    format!("{}. {} - {}", task.id, task.description, task.status_label())
}

pub fn removed(outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed(task) => format!("Task with ID {} has been removed.", task.id),
        RemoveOutcome::NotFound(id) => not_found(*id),
    }
}

pub fn toggled(outcome: &ToggleOutcome) -> String {
    match outcome {
        ToggleOutcome::Toggled(task) => format!(
            "Task with ID {} is now marked as {}.",
            task.id,
            task.status_label()
        ),
        ToggleOutcome::NotFound(id) => not_found(*id),
    }
}

fn not_found(id: TaskId) -> String {
    format!("Task with ID {id} not found.")
}
