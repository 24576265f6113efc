use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::commands::{
    ask_command, preview_command, projects_command, responses_command, settings_command, share_command,
    tui_command,
};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns the terminal, so logs go to a file (truncated on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("conversify.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting conversify");

    match cli.command {
        Commands::Tui(args) => tui_command(args).await,
        Commands::Projects(args) => projects_command(args).await,
        Commands::Responses(args) => responses_command(args).await,
        Commands::Share { project_id } => share_command(project_id).await,
        Commands::Ask { message } => ask_command(message).await,
        Commands::Preview { file } => preview_command(&file).await,
        Commands::Settings(args) => settings_command(args).await,
    }
}
