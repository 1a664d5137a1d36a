//! Line formatting shared by the console and file outputs

use chrono::{DateTime, Local};
use colored::Colorize;
use fclog_core::Level;
use std::fmt;
use std::panic::Location;

/// Source location of a log call, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Final path segment of the source file
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// `YYYY-MM-DD HH:MM:SS.nnnnnnnnn`
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S%.9f").to_string()
}

/// Level tag wrapped in its console color
pub fn colorize(level: Level) -> String {
    let tag = level.as_str();
    match level {
        Level::Debug => tag.white().to_string(),
        Level::Info => tag.green().to_string(),
        Level::Warning => tag.yellow().to_string(),
        Level::Error => tag.red().to_string(),
        Level::All | Level::None => tag.to_string(),
    }
}

pub fn console_line(timestamp: &str, site: &CallSite, level: Level, message: &str) -> String {
    format!("{} {} {} {}\n", timestamp, site, colorize(level), message)
}

pub fn file_line(timestamp: &str, site: &CallSite, level: Level, message: &str) -> String {
    format!("{} {} {} {}\n", timestamp, site, level.as_str(), message)
}
