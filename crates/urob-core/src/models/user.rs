use serde::{Deserialize, Serialize};

/// Backend user. Read-only from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// User reference inside a task response: bare id or embedded user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(i64),
    User(User),
}

impl UserRef {
    pub fn id(&self) -> i64 {
        match self {
            Self::Id(id) => *id,
            Self::User(user) => user.id,
        }
    }
}
