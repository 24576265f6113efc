use anyhow::{Result, bail};
use colored::Colorize;

use conversify::dashboard::{Dashboard, KeywordAssistant};

pub async fn ask_command(message: String) -> Result<()> {
    let mut dashboard = Dashboard::seeded();
    let Some(reply) = dashboard.ask(&KeywordAssistant, &message) else {
        bail!("Message is empty");
    };
    println!("{} {}", "Assistant:".bright_magenta().bold(), reply.content);

    for figure in &dashboard.suggested_figures {
        println!();
        println!("{} ({:?})", figure.title.bold(), figure.kind);
        for (name, share) in figure.shares() {
            println!("  {:<12} {:>5.1}%", name, share);
        }
    }

    Ok(())
}
