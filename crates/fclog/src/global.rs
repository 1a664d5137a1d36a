//! Process-wide logger and free functions over it

use fclog_core::{Error, Level, LoggerConfig, Result};
use once_cell::sync::OnceCell;
use std::fmt;

use crate::format::CallSite;
use crate::logger::RotatingLogger;

static LOGGER: OnceCell<RotatingLogger> = OnceCell::new();

/// Open the process-wide logger.
///
/// The first call wins. Any later call, or a call after [`logger`] already
/// created the console default, fails with [`Error::AlreadyInitialized`] and
/// leaves the existing logger and its files untouched.
pub fn init(config: LoggerConfig) -> Result<&'static RotatingLogger> {
    let mut opened = false;
    let logger = LOGGER.get_or_try_init(|| {
        opened = true;
        RotatingLogger::open(config)
    })?;

    if opened {
        Ok(logger)
    } else {
        Err(Error::AlreadyInitialized)
    }
}

/// The process-wide logger, falling back to a console-only logger if
/// [`init`] has not run yet
pub fn logger() -> &'static RotatingLogger {
    LOGGER.get_or_init(RotatingLogger::console)
}

/// The process-wide logger, if one exists
pub fn try_logger() -> Option<&'static RotatingLogger> {
    LOGGER.get()
}

/// Change the level of the process-wide logger.
///
/// Like every free function here this goes through [`logger`]: called before
/// [`init`], it installs the console-only default, and later [`init`] calls
/// fail with [`Error::AlreadyInitialized`]. Call [`init`] first to log to files.
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Level of the process-wide logger; installs the console default like
/// [`set_level`] when nothing was initialized
pub fn level() -> Level {
    logger().level()
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    logger().record(Level::Debug, message, CallSite::caller());
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    logger().record(Level::Info, message, CallSite::caller());
}

#[track_caller]
pub fn warning(message: impl fmt::Display) {
    logger().record(Level::Warning, message, CallSite::caller());
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    logger().record(Level::Error, message, CallSite::caller());
}
