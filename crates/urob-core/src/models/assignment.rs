use crate::User;

use serde::{Deserialize, Serialize};

/// User-to-task link.
///
/// No client operation sends or requests assignments directly; the shape
/// only shows up nested in task responses. The backend sends flat
/// `user_id`/`task_id` columns while the frontend schema nests the user,
/// so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
}

impl Assignment {
    /// Assignment for a nested user, as the frontend schema builds it
    pub fn for_user(user: User) -> Self {
        Self {
            id: None,
            user: Some(user),
            user_id: None,
            task_id: None,
        }
    }

    /// Assigned user's id, from whichever representation is present
    pub fn assigned_user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id).or(self.user_id)
    }
}

pub type AssignmentPayload = Assignment;
