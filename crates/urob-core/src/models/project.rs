//! Project entity - top-level container for tasks.

use crate::Task;

use serde::{Deserialize, Serialize};

/// A project as returned by the backend.
///
/// `get_tasks` returns this shape too, with `tasks` populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Find a task of this project by id
    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == Some(id))
    }
}
