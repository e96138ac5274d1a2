//! urob - project/task board CLI
//!
//! Thin command-line front end over the typed API client. Every command
//! issues the matching backend request and prints the JSON result.
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! urob project list --pretty
//!
//! # Create a task
//! urob task create --project-id 3 --title "Write docs" --status in_progress
//!
//! # Talk to another backend
//! urob --server http://10.0.0.5:8000 tag list
//! ```

mod cli;
mod commands;
mod project_commands;
mod tag_commands;
mod task_commands;
mod user_commands;

use crate::{
    cli::Cli, commands::Commands, project_commands::ProjectCommands, tag_commands::TagCommands,
    task_commands::TaskCommands, user_commands::UserCommands,
};

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::Value;
use urob_client::{Client, logger};
use urob_config::Config;
use urob_core::{NewProject, NewTask, ProjectPayload, TaskPayload};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; real env vars still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(cli.server.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting urob v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = Client::from_config(&config.api);

    match run(&client, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load, override and validate configuration, then start logging.
fn load_config(server: Option<String>) -> Result<Config, Box<dyn Error>> {
    let mut config = Config::load()?;

    // Explicit flag > UROB_API_URL > config.toml > default
    if let Some(url) = server {
        config.api.base_url = url;
    }

    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(&config.logging, log_file)?;

    Ok(config)
}

async fn run(client: &Client, command: Commands) -> Result<Value, Box<dyn Error>> {
    let value = match command {
        // Project commands
        Commands::Project { action } => match action {
            ProjectCommands::List => serde_json::to_value(client.get_projects().await?)?,
            ProjectCommands::Add { name } => serde_json::to_value(client.add_project(&name).await?)?,
            ProjectCommands::Create {
                name,
                description,
                tags,
                users,
            } => {
                let mut project = NewProject::named(name);
                project.description = description;
                project.tags.extend(tags);
                project.users.extend(users);
                serde_json::to_value(client.create_project(&project).await?)?
            }
            ProjectCommands::Update {
                id,
                name,
                description,
            } => {
                // Full replacement: start from the current state so tasks survive
                let current = client.get_tasks(id).await?;
                let mut payload = ProjectPayload::from(&current);
                if let Some(name) = name {
                    payload.name = name;
                }
                if let Some(description) = description {
                    payload.description = Some(description);
                }
                serde_json::to_value(client.update_project(id, &payload).await?)?
            }
            ProjectCommands::Delete { id } => client.delete_project(id).await?,
            ProjectCommands::Tasks { id } => serde_json::to_value(client.get_tasks(id).await?)?,
        },

        // Task commands
        Commands::Task { action } => match action {
            TaskCommands::Create {
                project_id,
                title,
                description,
                status,
            } => {
                let task = NewTask {
                    project_id,
                    title,
                    description,
                    status,
                };
                serde_json::to_value(client.create_task(&task).await?)?
            }
            TaskCommands::Update {
                id,
                title,
                status,
                description,
                due_date,
                project_id,
                tags,
                users,
            } => {
                let mut payload = TaskPayload::new(title, status);
                payload.id = Some(id);
                payload.description = description;
                payload.due_date = due_date;
                payload.project_id = project_id;
                payload.tags.extend(tags);
                payload.users.extend(users);
                serde_json::to_value(client.update_task(id, &payload).await?)?
            }
            TaskCommands::Delete { id } => client.delete_task(id).await?,
        },

        // Tag commands
        Commands::Tag { action } => match action {
            TagCommands::List => serde_json::to_value(client.get_tags().await?)?,
        },

        // User commands
        Commands::User { action } => match action {
            UserCommands::List => serde_json::to_value(client.get_users().await?)?,
        },
    };

    Ok(value)
}
