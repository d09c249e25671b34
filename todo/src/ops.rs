//! Task list operations: each loads the store, applies a core edit, and saves.
//!
//! `list` only loads. `remove` and `toggle` skip the save entirely when no
//! task matches, so the store file is left untouched.

use tracing::debug;

use crate::core::edit::{remove_first, toggle_first};
use crate::core::ids::{IdPolicy, next_id};
use crate::io::task_store::{StoreError, TaskStore};
use crate::task::{Task, TaskId};

/// Result of `remove_task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Task),
    NotFound(TaskId),
}

/// Result of `toggle_task`; `Toggled` carries the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled(Task),
    NotFound(TaskId),
}

/// Append a pending task and return it.
pub fn add_task(
    store: &TaskStore,
    policy: IdPolicy,
    description: &str,
) -> Result<Task, StoreError> {
    let mut tasks = store.load()?;
    let id = next_id(&tasks, policy).ok_or(StoreError::IdsExhausted)?;
    let task = Task::new(id, description);
    debug!(id = task.id, ?policy, "adding task");
    tasks.push(task.clone());
    store.save(&tasks)?;
    Ok(task)
}

/// All tasks in stored order.
pub fn list_tasks(store: &TaskStore) -> Result<Vec<Task>, StoreError> {
    store.load()
}

pub fn remove_task(store: &TaskStore, id: TaskId) -> Result<RemoveOutcome, StoreError> {
    let mut tasks = store.load()?;
    let Some(removed) = remove_first(&mut tasks, id) else {
        debug!(id, "remove: no matching task");
        return Ok(RemoveOutcome::NotFound(id));
    };
    store.save(&tasks)?;
    Ok(RemoveOutcome::Removed(removed))
}

pub fn toggle_task(store: &TaskStore, id: TaskId) -> Result<ToggleOutcome, StoreError> {
    let mut tasks = store.load()?;
    let Some(toggled) = toggle_first(&mut tasks, id) else {
        debug!(id, "toggle: no matching task");
        return Ok(ToggleOutcome::NotFound(id));
    };
    store.save(&tasks)?;
    Ok(ToggleOutcome::Toggled(toggled))
}
