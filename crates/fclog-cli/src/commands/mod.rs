//! Command implementations

pub mod files;
pub mod stress;
pub mod tail;
pub mod write;

use anyhow::Result;
use fclog::{LogReader, RotatingLogger};
use std::path::Path;

use crate::cli::LoggerArgs;
use crate::output::FileRow;

/// Open a logger from the shared logger flags
pub fn open_logger(args: &LoggerArgs) -> Result<RotatingLogger> {
    let config = args.to_config()?;
    let logger = RotatingLogger::open(config)?;
    tracing::info!("Logging to {}", logger.active_path().display());
    Ok(logger)
}

/// Active file first, then rotated files by suffix
pub fn collect_files(dir: &Path, stem: &str) -> Result<Vec<FileRow>> {
    let mut rows = Vec::new();

    let active = fclog::constants::active_path(dir, stem);
    if active.exists() {
        rows.push(FileRow {
            suffix: None,
            size_bytes: LogReader::new(active.clone()).size()?,
            path: active,
        });
    }

    for (suffix, path) in fclog::rotated_files(dir, stem)? {
        rows.push(FileRow {
            suffix: Some(suffix),
            size_bytes: LogReader::new(path.clone()).size()?,
            path,
        });
    }

    Ok(rows)
}
