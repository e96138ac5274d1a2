use crate::{Project, TaskPayload};

use serde::Serialize;

/// Full replacement body of `PUT /projects/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Always sent; `null` keeps the description empty on the backend
    pub description: Option<String>,
    pub tasks: Vec<TaskPayload>,
}

impl ProjectPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: Some(description.into()),
            tasks: Vec::new(),
        }
    }
}

impl From<&Project> for ProjectPayload {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            tasks: p.tasks.iter().map(TaskPayload::from).collect(),
        }
    }
}
