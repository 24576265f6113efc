use super::commands::projects::ProjectsCommands;
use super::commands::responses::ResponsesCommands;
use super::commands::settings::SettingsCommands;
use super::commands::tui::TuiCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conversify")]
#[command(about = "Design surveys and explore their results from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive TUI
    Tui(TuiCommands),
    /// Project list management
    Projects(ProjectsCommands),
    /// Browse and export survey responses
    Responses(ResponsesCommands),
    /// Show the survey link, embed code and social share links
    Share {
        /// Project id
        project_id: u32,
    },
    /// Ask the dashboard assistant for a figure
    Ask {
        /// Chat message, e.g. "show a pie chart"
        message: String,
    },
    /// Render a survey draft (JSON) as a text preview
    Preview {
        /// Path to the draft JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Application settings management
    Settings(SettingsCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tui_with_page() {
        let cli = Cli::try_parse_from(["conversify", "tui", "--project", "2", "--page", "dashboard"]).unwrap();
        let Commands::Tui(args) = cli.command else {
            panic!("expected tui command");
        };
        assert_eq!(args.project, 2);
    }
}
