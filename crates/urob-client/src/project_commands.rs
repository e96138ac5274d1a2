use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Create a project with only a name
    Add {
        /// Project name
        name: String,
    },
    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,
        /// Project description
        #[arg(long)]
        description: Option<String>,
        /// Tag ID to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<i64>,
        /// User ID to attach (repeatable)
        #[arg(long = "user")]
        users: Vec<i64>,
    },
    /// Update a project's name and/or description, keeping its tasks
    Update {
        /// Project ID
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: i64,
    },
    /// Show a project with its tasks
    Tasks {
        /// Project ID
        id: i64,
    },
}
