//! fclog - leveled console logging with size-rotated log files
//!
//! A [`RotatingLogger`] mirrors lines to the console, appends them to
//! `<logs_dir>/<name>.<pid>.log`, or both. Once the active file reaches the
//! configured size it is renamed to `<name>.<pid>-<n>.log` and a fresh file
//! takes its place.

mod format;
mod global;
mod logger;
mod macros;
mod reader;
mod rotation;

pub use fclog_core::{constants, Error, Level, LoggerConfig, Result};
pub use format::CallSite;
pub use global::{debug, error, info, init, level, logger, set_level, try_logger, warning};
pub use logger::RotatingLogger;
pub use reader::{rotated_files, LogReader};

use std::path::Path;

/// Ensure the log directory exists
pub fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!("Created log directory: {}", dir.display());
    }
    Ok(())
}
