//! Formatting macros.
//!
//! Each macro takes a format string and arguments like `format!`, with an
//! optional leading `logger: <expr>,` to pick an instance other than the
//! process-wide one. The call site is taken from the macro invocation.
//!
//! ```no_run
//! use fclog::{LoggerConfig, RotatingLogger};
//!
//! let logger = RotatingLogger::open(LoggerConfig::new("worker")).unwrap();
//! fclog::info!(logger: logger, "started {} jobs", 4);
//! fclog::warning!("no logger given, using the process-wide one");
//! ```

#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::RotatingLogger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            logger.record(
                level,
                ::std::format_args!($($arg)+),
                $crate::CallSite::new(::std::file!(), ::std::line!()),
            );
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::logger(), $level, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}
