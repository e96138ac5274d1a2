use crate::Project;

use serde_json::json;

#[test]
fn test_project_with_nested_tasks() {
    let project: Project = serde_json::from_value(json!({
        "id": 3,
        "name": "Website",
        "description": "Relaunch",
        "tasks": [
            {"id": 10, "title": "Design", "status": "done", "project_id": 3},
            {"id": 11, "title": "Build", "status": "todo", "project_id": 3}
        ]
    }))
    .unwrap();

    assert_eq!(project.id, Some(3));
    assert_eq!(project.tasks.len(), 2);
    assert_eq!(project.tasks[0].title, "Design");
    assert!(project.task(10).unwrap().is_done());
    assert!(project.task(99).is_none());
}

#[test]
fn test_project_without_tasks_field() {
    let project: Project =
        serde_json::from_value(json!({"id": 1, "name": "Empty", "description": null})).unwrap();

    assert!(project.tasks.is_empty());
    assert!(project.description.is_none());
}

#[test]
fn test_project_requires_name() {
    let result = serde_json::from_value::<Project>(json!({"id": 1}));
    assert!(result.is_err());
}
