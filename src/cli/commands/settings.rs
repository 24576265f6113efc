use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use conversify::config::{Config, SETTING_NAMES};

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current settings
    Show,
    /// Get the value of a specific setting
    Get {
        /// Setting name
        name: String,
    },
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
}

pub async fn settings_command(args: SettingsCommands) -> Result<()> {
    let mut config = Config::load()?;

    match args.command {
        SettingsSubcommands::Show => {
            println!("{}", "Settings:".bright_white().bold());
            for name in SETTING_NAMES {
                println!("  {:<20} {}", name.cyan(), config.get_setting(name)?);
            }
            println!();
            println!("  {} {}", "Config file:".dimmed(), Config::get_config_path()?.display());
        }
        SettingsSubcommands::Get { name } => {
            println!("{}", config.get_setting(&name)?);
        }
        SettingsSubcommands::Set { name, value } => {
            config.set_setting(&name, &value)?;
            config.save()?;
            println!(
                "{} Set {} to {}",
                "✓".bright_green().bold(),
                name.bold(),
                config.get_setting(&name)?
            );
        }
        SettingsSubcommands::Reset { name } => {
            config.reset_setting(&name)?;
            config.save()?;
            println!(
                "{} Reset {} to {}",
                "✓".bright_green().bold(),
                name.bold(),
                config.get_setting(&name)?
            );
        }
    }

    Ok(())
}
