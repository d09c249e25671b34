//! In-place edits of the task list.
//!
//! Lookups scan in list order and act on the first matching id only, so a
//! duplicated id leaves later entries untouched.

use crate::task::{Task, TaskId};

/// Remove the first task with `id`, returning it.
pub fn remove_first(tasks: &mut Vec<Task>, id: TaskId) -> Option<Task> {
    let index = tasks.iter().position(|task| task.id == id)?;
    Some(tasks.remove(index))
}

/// Flip `completed` on the first task with `id`, returning its new state.
pub fn toggle_first(tasks: &mut [Task], id: TaskId) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.completed = !task.completed;
    Some(task.clone())
}
