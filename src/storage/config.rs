//! Configuration handling for decklog
//!
//! Configuration is read from `decklog.toml` in the working directory or,
//! when that file is absent, from `~/.config/decklog/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the local configuration
pub const LOCAL_CONFIG_FILE: &str = "decklog.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the card catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the search API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Minimum delay between consecutive page requests, in milliseconds
    pub page_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.scryfall.com".to_string(),
            timeout_secs: 30,
            user_agent: format!("decklog/{}", env!("CARGO_PKG_VERSION")),
            page_delay_ms: 100,
        }
    }
}

/// Settings for `decklog stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Rows per top-cards table
    pub top: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { top: 5 }
    }
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Append-only decklist log
    pub log_path: PathBuf,

    /// Catalog API settings
    pub api: ApiConfig,

    /// Statistics settings
    pub stats: StatsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("decklists.txt"),
            api: ApiConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration for the current directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::load_from(&cwd)
    }

    /// Loads configuration, preferring `dir/decklog.toml` over the global file
    pub fn load_from(dir: &Path) -> Result<Self> {
        let local = dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_file(&local);
        }

        match Self::global_config_path() {
            Some(global) if global.is_file() => Self::load_file(&global),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "decklog", "decklog").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads and validates a single config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make commands misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("api.timeout_secs must be at least 1".to_string()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".to_string()));
        }
        if self.stats.top == 0 {
            return Err(ConfigError::Invalid("stats.top must be at least 1".to_string()));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("log_path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Writes the configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
