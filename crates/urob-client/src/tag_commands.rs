use clap::Subcommand;

#[derive(Subcommand)]
pub enum TagCommands {
    /// List all tags
    List,
}
