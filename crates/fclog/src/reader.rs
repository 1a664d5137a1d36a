//! Reading back active and rotated log files

use fclog_core::constants::LOG_EXTENSION;
use fclog_core::{Error, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Log reader for tailing a single file
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the last N lines from the log file
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut lines: VecDeque<String> = VecDeque::new();

        for line_result in reader.lines() {
            let line = line_result?;
            lines.push_back(line);
            if lines.len() > n {
                lines.pop_front();
            }
        }

        Ok(lines.into_iter().collect())
    }

    /// Read every line of the log file
    pub fn lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get file size
    pub fn size(&self) -> Result<u64> {
        if !self.path.exists() {
            return Ok(0);
        }
        Ok(std::fs::metadata(&self.path)?.len())
    }
}

/// Rotated files `<dir>/<stem>-<n>.log`, ordered by suffix
pub fn rotated_files(dir: &Path, stem: &str) -> Result<Vec<(u64, PathBuf)>> {
    let prefix = format!("{}-", stem);
    let extension = format!(".{}", LOG_EXTENSION);
    let pattern = format!(
        "{}/{}*{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(&prefix),
        extension
    );

    let entries = glob::glob(&pattern)
        .map_err(|e| Error::config(format!("Invalid log file pattern {}: {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| e.into_error())?;
        let suffix = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(prefix.as_str()))
            .and_then(|rest| rest.strip_suffix(extension.as_str()))
            .and_then(|n| n.parse::<u64>().ok());

        match suffix {
            Some(n) => files.push((n, path)),
            None => debug!("Ignoring non-rotated file: {}", path.display()),
        }
    }

    files.sort_by_key(|(n, _)| *n);
    Ok(files)
}
