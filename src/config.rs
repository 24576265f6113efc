use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://conversify.app";
pub const DEFAULT_ASSISTANT_DELAY_MS: u64 = 1000;

/// Setting names accepted by `get`/`set`/`reset`
pub const SETTING_NAMES: [&str; 3] = ["share-base-url", "assistant-delay-ms", "theme"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Mocha,
    Latte,
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Mocha => f.write_str("mocha"),
            ThemeVariant::Latte => f.write_str("latte"),
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mocha" => Ok(ThemeVariant::Mocha),
            "latte" => Ok(ThemeVariant::Latte),
            other => bail!("Unknown theme '{}'. Expected 'mocha' or 'latte'.", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_assistant_delay_ms")]
    pub assistant_delay_ms: u64,
    #[serde(default)]
    pub theme: ThemeVariant,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_assistant_delay_ms() -> u64 {
    DEFAULT_ASSISTANT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            assistant_delay_ms: default_assistant_delay_ms(),
            theme: ThemeVariant::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("conversify")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".conversify")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Load settings from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(path, content).with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn get_setting(&self, name: &str) -> Result<String> {
        match name {
            "share-base-url" => Ok(self.share_base_url.clone()),
            "assistant-delay-ms" => Ok(self.assistant_delay_ms.to_string()),
            "theme" => Ok(self.theme.to_string()),
            _ => bail!("Unknown setting: {}", name),
        }
    }

    pub fn set_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Setting {} to {}", name, value);
        match name {
            "share-base-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    bail!("share-base-url must start with http:// or https://");
                }
                self.share_base_url = value.to_string();
            }
            "assistant-delay-ms" => {
                self.assistant_delay_ms = value.parse().with_context(|| {
                    format!(
                        "Invalid value for assistant-delay-ms: '{}'. Must be a non-negative integer.",
                        value
                    )
                })?;
            }
            "theme" => self.theme = value.parse()?,
            _ => bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        let defaults = Self::default();
        match name {
            "share-base-url" => self.share_base_url = defaults.share_base_url,
            "assistant-delay-ms" => self.assistant_delay_ms = defaults.assistant_delay_ms,
            "theme" => self.theme = defaults.theme,
            _ => bail!("Unknown setting: {}", name),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.assistant_delay_ms, 1000);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_setting("theme", "latte").unwrap();
        config.set_setting("assistant-delay-ms", "250").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemeVariant::Latte);
        assert_eq!(loaded.assistant_delay_ms, 250);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"latte\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeVariant::Latte);
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.set_setting("assistant-delay-ms", "-1").is_err());
        assert!(config.set_setting("theme", "solarized").is_err());
        assert!(config.set_setting("share-base-url", "ftp://x").is_err());
        assert!(config.set_setting("colour", "red").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_get_and_reset_setting() {
        let mut config = Config::default();
        config.set_setting("share-base-url", "https://surveys.example.com").unwrap();
        assert_eq!(config.get_setting("share-base-url").unwrap(), "https://surveys.example.com");
        config.reset_setting("share-base-url").unwrap();
        assert_eq!(config.get_setting("share-base-url").unwrap(), DEFAULT_SHARE_BASE_URL);
        assert!(config.get_setting("nope").is_err());
    }
}
