use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use conversify::projects::ProjectList;

#[derive(Args)]
pub struct ProjectsCommands {
    #[command(subcommand)]
    pub command: ProjectsSubcommands,
}

#[derive(Subcommand)]
pub enum ProjectsSubcommands {
    /// List projects
    List,
}

pub async fn projects_command(args: ProjectsCommands) -> Result<()> {
    match args.command {
        ProjectsSubcommands::List => list(&ProjectList::seeded()),
    }
    Ok(())
}

fn list(projects: &ProjectList) {
    println!(
        "  {:<4} {:<32} {:>9}  {:<8} {}",
        "ID".bold(),
        "Name".bold(),
        "Responses".bold(),
        "Status".bold(),
        "Last updated".bold()
    );
    for project in projects.projects() {
        let status = if project.published {
            project.status_label().bright_green()
        } else {
            project.status_label().bright_yellow()
        };
        println!(
            "  {:<4} {:<32} {:>9}  {:<8} {}",
            project.id,
            project.name,
            project.responses,
            status,
            project.last_updated.format("%Y-%m-%d").to_string().dimmed()
        );
    }
}
