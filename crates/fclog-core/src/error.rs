//! Error types for fclog

use std::path::PathBuf;

/// fclog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rotate log file {from} -> {to}: {source}")]
    Rotation {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to reopen log file {path} after rotation: {source}")]
    Reopen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger is broken after a failed rotation: {0}")]
    Broken(PathBuf),

    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Invalid log name: {0}")]
    InvalidName(String),

    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type alias for fclog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    /// Errors after which the logger must not be written through again
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Rotation { .. } | Error::Reopen { .. } | Error::Broken(_)
        )
    }
}
