//! The process-wide logger lives for the whole test binary, so every check
//! that touches it runs inside this one test.

use fclog::{Error, Level, LoggerConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_process_wide_logger() {
    let dir = TempDir::new().unwrap();
    assert!(fclog::try_logger().is_none());

    let config = LoggerConfig::new("global")
        .with_console(false)
        .with_logs_dir(dir.path())
        .with_level(Level::Info);
    let logger = fclog::init(config.clone()).unwrap();
    let active = logger.active_path().to_path_buf();
    assert_eq!(
        active,
        dir.path().join(format!("global.{}.log", std::process::id()))
    );

    // First call wins; the existing file is left alone
    fclog::info("before second init");
    let err = fclog::init(config.with_max_size(1)).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized));
    assert!(fs::read_to_string(&active)
        .unwrap()
        .contains("INFO before second init"));

    fclog::debug("filtered out");
    fclog::warning("free function");
    fclog::info!("macro {}", 1);
    fclog::error!("macro {}", 2);

    fclog::set_level(Level::Debug);
    assert_eq!(fclog::level(), Level::Debug);
    fclog::debug!("now visible");

    let content = fs::read_to_string(&active).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("global.rs:") && lines[1].ends_with("WARN free function"));
    assert!(lines[2].ends_with("INFO macro 1"));
    assert!(lines[3].ends_with("ERROR macro 2"));
    assert!(lines[4].ends_with("DEBUG now visible"));
    assert!(!content.contains("filtered out"));

    assert!(std::ptr::eq(fclog::logger(), logger));
}
