mod project;
mod tag;
mod task;
mod task_status;
