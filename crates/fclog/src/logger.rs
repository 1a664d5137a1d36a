//! Leveled logger with size-based rotation

use chrono::Local;
use fclog_core::constants::{active_path, log_stem, rotated_path};
use fclog_core::{Error, Level, LoggerConfig, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, warn};

use crate::format::{self, CallSite};
use crate::reader::LogReader;
use crate::rotation::RotationState;

/// Everything a write may touch, guarded by a single lock
struct LogState {
    file: Option<File>,
    console: Box<dyn Write + Send>,
    rotation: RotationState,
    /// Opens the fresh active file after a rotation
    reopen: fn(&Path) -> io::Result<File>,
    /// Set while a rotation is in flight; stays set if it fails
    broken: bool,
}

/// Logger writing to the console, a rotating file, or both.
///
/// Each write runs under one lock from timestamp to file append, so lines
/// from concurrent callers never interleave and a rotation is never observed
/// half done. Only the level is read outside that lock.
pub struct RotatingLogger {
    name: String,
    process_id: String,
    logs_dir: PathBuf,
    stem: String,
    active_path: PathBuf,
    console_enabled: bool,
    file_enabled: bool,
    level: AtomicU8,
    state: Mutex<LogState>,
}

impl RotatingLogger {
    /// Open a logger, creating the logs directory and truncating the active
    /// file when file output is enabled.
    pub fn open(config: LoggerConfig) -> Result<Self> {
        config.validate()?;

        let process_id = config.resolved_process_id();
        let stem = log_stem(&config.name, &process_id);
        let active_path = active_path(&config.logs_dir, &stem);

        let file = if config.file {
            crate::ensure_log_dir(&config.logs_dir)?;
            let file = create_log_file(&active_path).map_err(|source| Error::CreateFile {
                path: active_path.clone(),
                source,
            })?;
            debug!("Opened log file: {}", active_path.display());
            Some(file)
        } else {
            None
        };

        Ok(Self {
            name: config.name,
            process_id,
            logs_dir: config.logs_dir,
            stem,
            active_path,
            console_enabled: config.console,
            file_enabled: config.file,
            level: AtomicU8::new(config.level.as_u8()),
            state: Mutex::new(LogState {
                file,
                console: Box::new(io::stdout()),
                rotation: RotationState::new(config.max_size_bytes),
                reopen: create_log_file,
                broken: false,
            }),
        })
    }

    /// Console-only logger at `Level::All`; cannot fail
    pub fn console() -> Self {
        let config = LoggerConfig::console_only();
        let process_id = config.resolved_process_id();
        let stem = log_stem(&config.name, &process_id);

        Self {
            active_path: active_path(&config.logs_dir, &stem),
            name: config.name,
            process_id,
            logs_dir: config.logs_dir,
            stem,
            console_enabled: true,
            file_enabled: false,
            level: AtomicU8::new(config.level.as_u8()),
            state: Mutex::new(LogState {
                file: None,
                console: Box::new(io::stdout()),
                rotation: RotationState::new(config.max_size_bytes),
                reopen: create_log_file,
                broken: false,
            }),
        }
    }

    /// Send console lines to `sink` instead of stdout
    pub fn with_console_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.state.get_mut().console = Box::new(sink);
        self
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Change the minimum level; concurrent writers may still see the old one
    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Whether a message at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.record(Level::Debug, message, CallSite::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.record(Level::Info, message, CallSite::caller());
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.record(Level::Warning, message, CallSite::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.record(Level::Error, message, CallSite::caller());
    }

    /// Filter and write one message.
    ///
    /// Console and file failures are reported through `tracing` and dropped.
    ///
    /// # Panics
    ///
    /// Panics if the active file could not be rotated, or if an earlier
    /// rotation already failed. Nothing is written through a lost handle.
    pub fn record(&self, level: Level, message: impl fmt::Display, site: CallSite) {
        match self.log(level, message, site) {
            Ok(()) => {}
            Err(e) if e.is_fatal() => panic!("fclog: {}", e),
            Err(e) => warn!("Failed to write log line for {}: {}", self.name, e),
        }
    }

    /// Filter and write one message, returning every failure to the caller
    pub fn log(&self, level: Level, message: impl fmt::Display, site: CallSite) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write(level, &message.to_string(), site)
    }

    /// Write one line without filtering.
    ///
    /// A fatal error from the file side takes precedence over a console
    /// error for the same call.
    pub fn write(&self, level: Level, message: &str, site: CallSite) -> Result<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let timestamp = format::timestamp(&Local::now());

        let console_result = if self.console_enabled {
            let line = format::console_line(&timestamp, &site, level, message);
            write_console(state.console.as_mut(), &line)
        } else {
            Ok(())
        };

        if self.file_enabled {
            let line = format::file_line(&timestamp, &site, level, message);
            self.write_file(state, &line)?;
        }

        console_result.map_err(Error::from)
    }

    fn write_file(&self, state: &mut LogState, line: &str) -> Result<()> {
        if state.broken {
            return Err(Error::Broken(self.active_path.clone()));
        }

        match fs::metadata(&self.active_path) {
            Ok(meta) if state.rotation.should_rotate(meta.len()) => self.rotate(state)?,
            Ok(_) => {}
            Err(e) => debug!(
                "Skipping rotation check for {}: {}",
                self.active_path.display(),
                e
            ),
        }

        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Close the active file, move it to the next suffix, start a fresh one
    fn rotate(&self, state: &mut LogState) -> Result<()> {
        let target = rotated_path(&self.logs_dir, &self.stem, state.rotation.next_suffix());
        debug!(
            "Rotating log file: {} -> {}",
            self.active_path.display(),
            target.display()
        );

        state.broken = true;
        drop(state.file.take());

        fs::rename(&self.active_path, &target).map_err(|source| Error::Rotation {
            from: self.active_path.clone(),
            to: target.clone(),
            source,
        })?;
        state.rotation.advance();

        let file = (state.reopen)(&self.active_path).map_err(|source| Error::Reopen {
            path: self.active_path.clone(),
            source,
        })?;
        state.file = Some(file);
        state.broken = false;

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn process_id(&self) -> &str {
        &self.process_id
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// `<logs_dir>/<name>.<pid>`, the prefix of every file of this logger
    pub fn base_path(&self) -> PathBuf {
        self.logs_dir.join(&self.stem)
    }

    /// File stem `<name>.<pid>`
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Get the active log file path
    pub fn active_path(&self) -> &Path {
        &self.active_path
    }

    /// Path the `suffix`-th rotation moves the active file to
    pub fn rotated_path(&self, suffix: u64) -> PathBuf {
        rotated_path(&self.logs_dir, &self.stem, suffix)
    }

    pub fn console_enabled(&self) -> bool {
        self.console_enabled
    }

    pub fn file_enabled(&self) -> bool {
        self.file_enabled
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.state.lock().rotation.max_size_bytes()
    }

    pub fn next_suffix(&self) -> u64 {
        self.state.lock().rotation.next_suffix()
    }

    pub fn rotations(&self) -> u64 {
        self.state.lock().rotation.rotations()
    }

    /// Rotated files of this logger that exist on disk, ordered by suffix
    pub fn rotated_files(&self) -> Result<Vec<(u64, PathBuf)>> {
        crate::reader::rotated_files(&self.logs_dir, &self.stem)
    }

    /// Reader over the active file
    pub fn reader(&self) -> LogReader {
        LogReader::new(self.active_path.clone())
    }

    /// Whether a failed rotation has disabled file output for good
    pub fn is_broken(&self) -> bool {
        self.state.lock().broken
    }
}

impl fmt::Debug for RotatingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingLogger")
            .field("name", &self.name)
            .field("process_id", &self.process_id)
            .field("active_path", &self.active_path)
            .field("console_enabled", &self.console_enabled)
            .field("file_enabled", &self.file_enabled)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// Create or truncate a log file
fn create_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn write_console(console: &mut dyn Write, line: &str) -> io::Result<()> {
    console.write_all(line.as_bytes())?;
    console.flush()
}
