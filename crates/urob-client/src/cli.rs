use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "urob")]
#[command(about = "Command-line client for the urob project/task board")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides UROB_API_URL and config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
