//! Touching the process-wide logger before `init` installs the console
//! default; kept in its own binary since that state cannot be undone.

use fclog::{Error, Level, LoggerConfig};
use tempfile::TempDir;

#[test]
fn test_set_level_before_init_installs_console_default() {
    let dir = TempDir::new().unwrap();
    assert!(fclog::try_logger().is_none());

    fclog::set_level(Level::Error);

    let default = fclog::try_logger().unwrap();
    assert!(default.console_enabled());
    assert!(!default.file_enabled());
    assert_eq!(fclog::level(), Level::Error);

    let config = LoggerConfig::new("late").with_logs_dir(dir.path().join("logs"));
    let err = fclog::init(config).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized));
    assert!(!dir.path().join("logs").exists());
    assert!(std::ptr::eq(fclog::logger(), default));
}
