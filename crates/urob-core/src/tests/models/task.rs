use crate::{Task, TaskStatus};

use serde_json::json;

#[test]
fn test_task_backend_shape_deserializes() {
    let task: Task = serde_json::from_value(json!({
        "id": 7,
        "title": "Write docs",
        "description": null,
        "status": "in_progress",
        "due_date": "2025-03-01",
        "project_id": 3,
        "tags": [{"id": 1, "name": "docs"}],
        "assignments": [{"id": 11, "user_id": 5, "task_id": 7}]
    }))
    .unwrap();

    assert_eq!(task.id, Some(7));
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.due_date.as_deref(), Some("2025-03-01"));
    assert_eq!(task.tag_ids(), vec![1]);
    assert_eq!(task.user_ids(), vec![5]);
}

#[test]
fn test_task_null_status_defaults_to_todo() {
    let task: Task = serde_json::from_value(json!({
        "id": 1,
        "title": "Legacy row",
        "status": null
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.tags.is_empty());
    assert!(task.users.is_empty());
}

#[test]
fn test_task_missing_status_defaults_to_todo() {
    let task: Task = serde_json::from_value(json!({"title": "New"})).unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(!task.is_done());
}

#[test]
fn test_task_invalid_status_is_rejected() {
    let result = serde_json::from_value::<Task>(json!({
        "title": "Bad",
        "status": "blocked"
    }));
    assert!(result.is_err());
}

#[test]
fn test_task_user_ids_merges_users_and_assignments() {
    let task: Task = serde_json::from_value(json!({
        "title": "Pair on review",
        "users": [3, {"id": 1}],
        "assignments": [
            {"user": {"id": 3, "username": "bo"}},
            {"user_id": 8}
        ]
    }))
    .unwrap();

    assert_eq!(task.user_ids(), vec![1, 3, 8]);
}
