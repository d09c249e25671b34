//! Checks on a loaded list that the store schema cannot express.

use std::collections::HashSet;

use crate::task::{Task, TaskId};

/// Ids that appear more than once, in order of their second occurrence.
///
/// Duplicates are tolerated: `remove` and `toggle` act on the first match.
pub fn duplicate_ids(tasks: &[Task]) -> Vec<TaskId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for task in tasks {
        if !seen.insert(task.id) && reported.insert(task.id) {
            duplicates.push(task.id);
        }
    }
    duplicates
}
