use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Todo.as_str(), "todo");
    assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TaskStatus::Done.as_str(), "done");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str("in_progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("blocked").is_err());
    assert!(TaskStatus::from_str("Done").is_err());
}

#[test]
fn test_task_status_from_str_error_names_value() {
    let err = TaskStatus::from_str("archived").unwrap_err();
    assert!(err.to_string().contains("archived"));
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

#[test]
fn test_task_status_serde_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in_progress\""
    );
    let parsed: TaskStatus = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(parsed, TaskStatus::Done);
}

#[test]
fn test_task_status_rejects_unknown_value() {
    let parsed = serde_json::from_str::<TaskStatus>("\"review\"");
    assert!(parsed.is_err());
}
