//! Data model shared by the urob API client.
//!
//! Entities mirror what the backend returns; payloads are what the client
//! sends. Payloads reference tags and users by id only.

pub mod error;
pub mod models;
pub mod payloads;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use models::assignment::{Assignment, AssignmentPayload};
pub use models::project::Project;
pub use models::tag::{Tag, TagRef};
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::{User, UserRef};
pub use payloads::new_project::NewProject;
pub use payloads::new_task::NewTask;
pub use payloads::project_payload::ProjectPayload;
pub use payloads::task_payload::TaskPayload;
