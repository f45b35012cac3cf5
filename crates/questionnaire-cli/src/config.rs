//! Configuration management for the Questionnaire CLI
//!
//! Stores the API base URL in ~/.config/questionnaire/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "questionnaire";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "QUESTIONNAIRE_API_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Base URL to use: `--url` flag, then environment, then config file
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<String>) -> String {
        flag.map(str::to_string)
            .or_else(|| env.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_default_url() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_base_url() {
        let config = Config::parse(r#"base_url = "https://example.test""#).unwrap();
        assert_eq!(config.base_url, "https://example.test");
    }

    #[test]
    fn test_flag_wins_over_env_and_file() {
        let config = Config::default();
        let url = config.resolve_base_url(
            Some("http://flag"),
            Some("http://env".to_string()),
        );
        assert_eq!(url, "http://flag");
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = Config::default();
        assert_eq!(
            config.resolve_base_url(None, Some("http://env".to_string())),
            "http://env"
        );
        assert_eq!(
            config.resolve_base_url(None, Some("  ".to_string())),
            "http://localhost:8000"
        );
    }
}
