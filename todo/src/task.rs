use serde::{Deserialize, Serialize};

/// Identifier assigned to a task at creation time.
pub type TaskId = u64;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Free text; persisted under the `task` key.
    #[serde(rename = "task")]
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}
