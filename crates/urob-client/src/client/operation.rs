use std::fmt;

/// Backend operation a request was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchProjects,
    CreateProject,
    UpdateProject,
    DeleteProject,
    GetTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
    GetTags,
    GetUsers,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchProjects => "fetch projects",
            Self::CreateProject => "create project",
            Self::UpdateProject => "update project",
            Self::DeleteProject => "delete project",
            Self::GetTasks => "fetch tasks",
            Self::CreateTask => "create task",
            Self::UpdateTask => "update task",
            Self::DeleteTask => "delete task",
            Self::GetTags => "fetch tags",
            Self::GetUsers => "fetch users",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {}", self.as_str())
    }
}
