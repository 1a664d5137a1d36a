//! Constants, default values and log file naming

use std::path::{Path, PathBuf};

/// Default log directory, relative to the working directory
pub const LOGS_DIR: &str = "logs";

/// Extension shared by active and rotated log files
pub const LOG_EXTENSION: &str = "log";

/// Default log name
pub const DEFAULT_NAME: &str = "app";

/// Default rotation threshold in bytes (10MB)
pub const DEFAULT_LOG_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Config file names looked up by the CLI (in priority order)
pub const CONFIG_FILES: &[&str] = &["fclog.toml", "fclog.yaml", "fclog.yml", "fclog.json"];

/// Get the default logs directory
pub fn logs_dir() -> PathBuf {
    PathBuf::from(LOGS_DIR)
}

/// File stem shared by every file of one logger: `<name>.<pid>`
pub fn log_stem(name: &str, process_id: &str) -> String {
    format!("{}.{}", name, process_id)
}

/// Path of the active log file: `<dir>/<stem>.log`
pub fn active_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, LOG_EXTENSION))
}

/// Path of the rotated log file with the given suffix: `<dir>/<stem>-<n>.log`
pub fn rotated_path(dir: &Path, stem: &str, suffix: u64) -> PathBuf {
    dir.join(format!("{}-{}.{}", stem, suffix, LOG_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_stem() {
        assert_eq!(log_stem("server", "4242"), "server.4242");
    }

    #[test]
    fn test_active_path() {
        let path = active_path(Path::new("logs"), "server.4242");
        assert_eq!(path, PathBuf::from("logs/server.4242.log"));
    }

    #[test]
    fn test_rotated_path() {
        let dir = Path::new("/var/log/fclog");
        assert_eq!(
            rotated_path(dir, "server.4242", 1),
            PathBuf::from("/var/log/fclog/server.4242-1.log")
        );
        assert_eq!(
            rotated_path(dir, "server.4242", 12),
            PathBuf::from("/var/log/fclog/server.4242-12.log")
        );
    }
}
