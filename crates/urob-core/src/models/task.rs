//! Task entity - unit of work belonging to a project.

use crate::{Assignment, TagRef, TaskStatus, UserRef};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    /// Date string as stored by the backend, e.g. "2025-01-31"
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub users: Vec<UserRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Assignment>,
}

impl Task {
    pub fn tag_ids(&self) -> Vec<i64> {
        self.tags.iter().map(TagRef::id).collect()
    }

    /// Ids of users linked directly or through assignments, deduplicated
    pub fn user_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .users
            .iter()
            .map(UserRef::id)
            .chain(self.assignments.iter().filter_map(Assignment::assigned_user_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// The backend stores status as a nullable column.
fn null_as_default<'de, D>(deserializer: D) -> Result<TaskStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TaskStatus>::deserialize(deserializer)?.unwrap_or_default())
}
