use crate::TaskPayload;

use std::collections::BTreeSet;

use serde::Serialize;

/// Body of `POST /projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    /// Project name (required)
    pub name: String,

    /// Optional description; the backend decides the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tasks created together with the project
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskPayload>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<i64>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub users: BTreeSet<i64>,
}

impl NewProject {
    /// A project with only a name, as the quick-add form sends it
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tasks: Vec::new(),
            tags: BTreeSet::new(),
            users: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_task(mut self, task: TaskPayload) -> Self {
        self.tasks.push(task);
        self
    }
}
