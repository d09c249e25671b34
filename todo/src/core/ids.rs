//! Id assignment for newly added tasks.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

/// How `add` derives the id of a new task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `len + 1`. Can collide with a surviving id after a removal.
    #[default]
    Length,
    /// `max(existing ids) + 1`, or 1 for an empty list.
    MaxPlusOne,
}

/// Largest id the store accepts; kept in step with the schema's `maximum`.
pub const MAX_TASK_ID: TaskId = i64::MAX as TaskId;

/// Compute the id for the next task appended to `tasks`.
///
/// Returns `None` when the next id would pass [`MAX_TASK_ID`].
pub fn next_id(tasks: &[Task], policy: IdPolicy) -> Option<TaskId> {
    let last = match policy {
        IdPolicy::Length => tasks.len() as TaskId,
        IdPolicy::MaxPlusOne => tasks.iter().map(|task| task.id).max().unwrap_or(0),
    };
    last.checked_add(1).filter(|id| *id <= MAX_TASK_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::task;

    #[test]
    fn empty_list_starts_at_one() {
        assert_eq!(next_id(&[], IdPolicy::Length), Some(1));
        assert_eq!(next_id(&[], IdPolicy::MaxPlusOne), Some(1));
    }

    #[test]
    fn length_policy_reuses_id_after_gap() {
        let tasks = vec![task(1, "a", false), task(3, "c", false)];
        assert_eq!(next_id(&tasks, IdPolicy::Length), Some(3));
    }

    #[test]
    fn max_plus_one_skips_past_gap() {
        let tasks = vec![task(1, "a", false), task(3, "c", false)];
        assert_eq!(next_id(&tasks, IdPolicy::MaxPlusOne), Some(4));
    }

    #[test]
    fn max_plus_one_stops_at_max_id() {
        let tasks = vec![task(MAX_TASK_ID - 1, "a", false)];
        assert_eq!(next_id(&tasks, IdPolicy::MaxPlusOne), Some(MAX_TASK_ID));

        let tasks = vec![task(MAX_TASK_ID, "a", false)];
        assert_eq!(next_id(&tasks, IdPolicy::MaxPlusOne), None);

        let tasks = vec![task(TaskId::MAX, "a", false)];
        assert_eq!(next_id(&tasks, IdPolicy::MaxPlusOne), None);
    }
}
