//! Configuration module for the mket CLI.
//!
//! Settings come from an optional `mket.toml`; every field has a default so
//! an empty or partial file is valid.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{MketError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "mket.toml";

/// Default number of `ILLEGAL` tokens listed per file by `check`.
const DEFAULT_MAX_ILLEGAL: usize = 20;

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Illegal-character check settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// How `tokens` prints a token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `OFFSET KIND "literal"` line per token.
    #[default]
    Text,
    /// One JSON document per file.
    Json,
}

/// Token dump configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the byte offset of every token.
    #[serde(default = "default_true")]
    pub offsets: bool,
}

/// Check configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// How many illegal characters are listed per file before truncating.
    #[serde(default = "default_max_illegal")]
    pub max_illegal: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_illegal() -> usize {
    DEFAULT_MAX_ILLEGAL
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            offsets: true,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_illegal: DEFAULT_MAX_ILLEGAL,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/mket/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MketError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MketError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("mket").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("mket").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
