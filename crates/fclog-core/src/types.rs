//! Core types for fclog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Names that would leave the logs directory: path separators, NUL, `.` and `..`
static UNSAFE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[/\\\x00]|^\.{1,2}$").expect("Invalid log name regex")
});

/// Validate a log name so it cannot escape the logs directory.
///
/// Any other string is accepted, dots and spaces included.
pub fn validate_log_name(name: &str) -> Result<()> {
    if !name.is_empty() && !UNSAFE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// Log severity, ordered from most to least verbose.
///
/// `All` and `None` are only meaningful as filter thresholds: a logger at
/// `All` emits everything, one at `None` emits nothing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    #[default]
    All = 0,
    Debug = 1,
    Info = 2,
    #[serde(alias = "warn")]
    Warning = 3,
    Error = 4,
    None = 5,
}

impl Level {
    /// Tag written into log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
            Level::None => "NONE",
        }
    }

    /// Whether a message at `level` passes a filter set to `self`
    pub fn allows(&self, level: Level) -> bool {
        *self <= level
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::as_u8`]; out-of-range values clamp to `None`
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::All,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warning,
            4 => Level::Error,
            _ => Level::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Level::All),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "none" | "off" => Ok(Level::None),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}
