//! Logger configuration
//!
//! A `LoggerConfig` can be built in code or loaded from a file in one of:
//! - TOML (.toml)
//! - YAML (.yaml, .yml)
//! - JSON (.json)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::{validate_log_name, Level};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

fn default_true() -> bool {
    true
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_max_size() -> u64 {
    DEFAULT_LOG_MAX_SIZE
}

/// Everything needed to open a logger. Immutable once the logger is open,
/// except for the level which can be changed on the logger itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Mirror lines to the console
    #[serde(default = "default_true")]
    pub console: bool,
    /// Persist lines to disk
    #[serde(default = "default_true")]
    pub file: bool,
    /// Log identity, used as the file name stem
    #[serde(default = "default_name")]
    pub name: String,
    /// Rotation threshold for the active file
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// Initial minimum level
    #[serde(default)]
    pub level: Level,
    /// Directory holding active and rotated files
    #[serde(default = "logs_dir")]
    pub logs_dir: PathBuf,
    /// Overrides the current process id in file names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: true,
            name: default_name(),
            max_size_bytes: DEFAULT_LOG_MAX_SIZE,
            level: Level::All,
            logs_dir: logs_dir(),
            process_id: None,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Console-only configuration; never touches the filesystem
    pub fn console_only() -> Self {
        Self {
            file: false,
            ..Default::default()
        }
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file = enabled;
        self
    }

    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size_bytes = bytes;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = dir.into();
        self
    }

    pub fn with_process_id(mut self, process_id: impl Into<String>) -> Self {
        self.process_id = Some(process_id.into());
        self
    }

    /// Process id used in file names
    pub fn resolved_process_id(&self) -> String {
        self.process_id
            .clone()
            .unwrap_or_else(|| std::process::id().to_string())
    }

    /// Check the config before any file is created
    pub fn validate(&self) -> Result<()> {
        validate_log_name(&self.name)?;
        if self.max_size_bytes == 0 {
            return Err(Error::config("max_size_bytes must be greater than zero"));
        }
        if let Some(pid) = &self.process_id {
            validate_log_name(pid)?;
        }
        Ok(())
    }

    /// Load config from file, automatically detecting format from extension
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported config file extension: {}. Expected .toml, .yaml, .yml, or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Find and load the first known config file in a directory
    pub fn find_and_load(dir: &Path) -> Result<(Self, PathBuf)> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                let config = Self::load_from(&path)?;
                return Ok((config, path));
            }
        }
        Err(Error::ConfigError(format!(
            "No config file found in {}. Expected one of: {:?}",
            dir.display(),
            CONFIG_FILES
        )))
    }
}
