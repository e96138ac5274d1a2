use crate::{
    project_commands::ProjectCommands, tag_commands::TagCommands, task_commands::TaskCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Tag operations
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
