use clap::Subcommand;
use urob_core::TaskStatus;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task
    Create {
        /// Project ID
        #[arg(long)]
        project_id: i64,
        /// Task title
        #[arg(long)]
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Status (todo, in_progress, done); backend default when omitted
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Replace a task
    Update {
        /// Task ID
        id: i64,
        /// Task title
        #[arg(long)]
        title: String,
        /// Status (todo, in_progress, done)
        #[arg(long)]
        status: TaskStatus,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Due date, e.g. 2025-01-31
        #[arg(long)]
        due_date: Option<String>,
        /// Move the task to another project
        #[arg(long)]
        project_id: Option<i64>,
        /// Tag ID (repeatable)
        #[arg(long = "tag")]
        tags: Vec<i64>,
        /// Assigned user ID (repeatable)
        #[arg(long = "user")]
        users: Vec<i64>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
}
