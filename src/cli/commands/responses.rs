use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use conversify::format::format_duration;
use conversify::responses::{Response, ResponseFilter, ResponseStatus, export_csv, group_by_question, seed_responses};

#[derive(Args)]
pub struct ResponsesCommands {
    #[command(subcommand)]
    pub command: ResponsesSubcommands,
}

#[derive(Subcommand)]
pub enum ResponsesSubcommands {
    /// List responses
    List {
        /// Group answers by question instead of by respondent
        #[arg(long)]
        by_question: bool,
        /// Only show responses with this status (completed or partial)
        #[arg(long)]
        status: Option<ResponseStatus>,
    },
    /// Export responses to CSV, one row per answer
    Export {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Only export responses with this status (completed or partial)
        #[arg(long)]
        status: Option<ResponseStatus>,
    },
}

pub async fn responses_command(args: ResponsesCommands) -> Result<()> {
    let responses = seed_responses();

    match args.command {
        ResponsesSubcommands::List { by_question, status } => {
            let filtered: Vec<Response> = ResponseFilter { status }
                .apply(&responses)
                .into_iter()
                .cloned()
                .collect();
            if by_question {
                print_by_question(&filtered);
            } else {
                print_table(&filtered);
            }
        }
        ResponsesSubcommands::Export { output, status } => {
            let filter = ResponseFilter { status };
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let rows = export_csv(filter.apply(&responses), BufWriter::new(file))?;
            info!("Exported {} rows to {}", rows, output.display());
            println!(
                "{} Exported {} rows to {}",
                "✓".bright_green().bold(),
                rows,
                output.display().to_string().bold()
            );
        }
    }

    Ok(())
}

fn print_table(responses: &[Response]) {
    if responses.is_empty() {
        println!("  {}", "No responses".bright_yellow());
        return;
    }
    for response in responses {
        let status = match response.status {
            ResponseStatus::Completed => response.status.as_str().bright_green(),
            ResponseStatus::Partial => response.status.as_str().bright_yellow(),
        };
        println!(
            "{} {}  {}  {}",
            response.respondent.bold(),
            response.completed_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            format_duration(response.time_spent),
            status
        );
        for answer in &response.answers {
            println!("  {} {}", format!("{}:", answer.question).cyan(), answer.answer);
        }
    }
}

fn print_by_question(responses: &[Response]) {
    for group in group_by_question(responses) {
        println!("{}", group.question_text.bright_white().bold());
        for entry in &group.entries {
            println!(
                "  {:<14} {:<24} {}",
                entry.respondent,
                entry.answer,
                entry.completed_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
            );
        }
        println!();
    }
}
