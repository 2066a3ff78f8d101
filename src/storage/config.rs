//! Configuration handling
//!
//! Configuration is read from `config.toml` in the platform config
//! directory (e.g. `~/.config/todo-md/config.toml`). Every key is optional;
//! command-line flags and environment variables take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document path used when nothing else names one
pub const DEFAULT_FILE: &str = "todo.md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default document path
    pub file: Option<PathBuf>,

    /// Default output format
    pub format: OutputFormat,

    /// Suppress the listing after edits by default
    pub quiet: bool,
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "todo-md", "todo-md").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Picks the document path: explicit choice, then config, then default
    pub fn resolve_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
    }

    /// Picks the output format: explicit choice, then config
    pub fn resolve_format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.unwrap_or(self.format)
    }

    /// Picks quiet mode: `--quiet`/`--no-quiet`, then config
    pub fn resolve_quiet(&self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or(self.quiet)
    }
}
