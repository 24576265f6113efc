use anyhow::Result;
use colored::Colorize;

use conversify::config::Config;
use conversify::sharing::{SocialPlatform, embed_code, survey_link};

pub async fn share_command(project_id: u32) -> Result<()> {
    let config = Config::load()?;
    let link = survey_link(&config.share_base_url, project_id);

    println!("{}", "Survey link".bright_white().bold());
    println!("  {}", link.cyan());
    println!();
    println!("{}", "Embed code".bright_white().bold());
    println!("  {}", embed_code(&link));
    println!();
    println!("{}", "Share on social media".bright_white().bold());
    for platform in SocialPlatform::ALL {
        match platform.share_url(&link) {
            Some(url) => println!("  {:<10} {}", platform.name(), url.cyan()),
            None => println!("  {:<10} {}", platform.name(), "no web share, copy the survey link".dimmed()),
        }
    }

    Ok(())
}
