use crate::{Task, TaskStatus};

use std::collections::BTreeSet;

use serde::Serialize;

/// Task body for `PUT /tasks/{id}` and for tasks nested in project payloads.
///
/// Tags and users are id sets; embedded objects are never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Always sent; `null` clears the due date
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub tags: BTreeSet<i64>,
    pub users: BTreeSet<i64>,
}

impl TaskPayload {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            status,
            due_date: None,
            project_id: None,
            tags: BTreeSet::new(),
            users: BTreeSet::new(),
        }
    }
}

impl From<&Task> for TaskPayload {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id,
            title: t.title.clone(),
            description: t.description.clone(),
            status: t.status,
            due_date: t.due_date.clone(),
            project_id: t.project_id,
            tags: t.tag_ids().into_iter().collect(),
            users: t.user_ids().into_iter().collect(),
        }
    }
}
