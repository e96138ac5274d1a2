pub mod new_project;
pub mod new_task;
pub mod project_payload;
pub mod task_payload;
