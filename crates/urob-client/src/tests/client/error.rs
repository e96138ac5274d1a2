use crate::{ClientError, Operation};

use reqwest::StatusCode;

#[test]
fn test_operation_messages() {
    assert_eq!(
        Operation::FetchProjects.to_string(),
        "Failed to fetch projects"
    );
    assert_eq!(Operation::CreateProject.to_string(), "Failed to create project");
    assert_eq!(Operation::GetTasks.to_string(), "Failed to fetch tasks");
    assert_eq!(Operation::DeleteTask.to_string(), "Failed to delete task");
    assert_eq!(Operation::GetUsers.to_string(), "Failed to fetch users");
}

#[test]
fn test_status_error_carries_operation_and_status() {
    let err = ClientError::status(Operation::UpdateTask, StatusCode::NOT_FOUND);

    assert_eq!(err.operation(), Operation::UpdateTask);
    assert_eq!(err.http_status(), Some(404));

    let msg = err.to_string();
    assert!(msg.starts_with("Failed to update task: HTTP 404 Not Found"));
}

#[test]
fn test_status_error_has_no_source() {
    use std::error::Error;

    let err = ClientError::status(Operation::GetTags, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.source().is_none());
    assert!(err.to_string().contains("500"));
}
