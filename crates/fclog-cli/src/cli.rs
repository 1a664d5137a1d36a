//! CLI argument definitions

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fclog_core::{LoggerConfig, CONFIG_FILES};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fclogctl")]
#[command(version, about = "Leveled logging with size-based log rotation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write messages through a logger
    Write(WriteArgs),

    /// Write from many threads at once and report rotations
    Stress(StressArgs),

    /// Show the last lines of a log file
    Tail(TailArgs),

    /// List the active and rotated files of a logger
    Files(FilesArgs),
}

/// Logger settings shared by commands that open a logger
#[derive(Args, Clone)]
pub struct LoggerArgs {
    /// Config file (.toml, .yaml, .yml or .json); defaults to ./fclog.* if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log name, used as the file name stem
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory for log files
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Rotate the active file once it reaches this many bytes
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Minimum level: all, debug, info, warn, error, none
    #[arg(long)]
    pub level: Option<String>,

    /// Override the process id used in file names
    #[arg(long)]
    pub pid: Option<String>,

    /// Do not mirror lines to the console
    #[arg(long)]
    pub no_console: bool,

    /// Do not write log files
    #[arg(long)]
    pub no_file: bool,
}

impl LoggerArgs {
    /// Resolve flags on top of the config file, if any
    pub fn to_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => discover_config(Path::new("."))?,
        };

        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(dir) = &self.dir {
            config.logs_dir = dir.clone();
        }
        if let Some(max_size) = self.max_size {
            config.max_size_bytes = max_size;
        }
        if let Some(level) = &self.level {
            config.level = level.parse()?;
        }
        if let Some(pid) = &self.pid {
            config.process_id = Some(pid.clone());
        }
        if self.no_console {
            config.console = false;
        }
        if self.no_file {
            config.file = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load `fclog.*` from `dir` when one exists, defaults otherwise
fn discover_config(dir: &Path) -> Result<LoggerConfig> {
    if CONFIG_FILES.iter().any(|name| dir.join(name).exists()) {
        let (config, path) = LoggerConfig::find_and_load(dir)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    } else {
        Ok(LoggerConfig::default())
    }
}

#[derive(Args)]
pub struct WriteArgs {
    #[command(flatten)]
    pub logger: LoggerArgs,

    /// Level to write the messages at
    #[arg(short = 'a', long = "at", default_value = "info")]
    pub at: String,

    /// Write each message this many times
    #[arg(long, default_value = "1")]
    pub repeat: usize,

    /// Messages to write, one line each
    #[arg(required = true)]
    pub messages: Vec<String>,
}

#[derive(Args)]
pub struct StressArgs {
    #[command(flatten)]
    pub logger: LoggerArgs,

    /// Number of writer threads
    #[arg(short, long, default_value = "4")]
    pub threads: usize,

    /// Messages written by each thread
    #[arg(short, long, default_value = "1000")]
    pub messages: usize,
}

#[derive(Args)]
pub struct TailArgs {
    /// Log file to read
    pub path: PathBuf,

    /// Number of lines to show
    #[arg(long, default_value = "15")]
    pub lines: usize,

    /// Filter log lines by regex pattern
    #[arg(long)]
    pub grep: Option<String>,
}

#[derive(Args)]
pub struct FilesArgs {
    /// Log name
    pub name: String,

    /// Process id the files were written by
    pub pid: String,

    /// Directory holding the log files
    #[arg(long, default_value = fclog_core::LOGS_DIR)]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fclog_core::Level;
    use tempfile::TempDir;

    fn args() -> LoggerArgs {
        LoggerArgs {
            config: None,
            name: None,
            dir: None,
            max_size: None,
            level: None,
            pid: None,
            no_console: false,
            no_file: false,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fclog.toml");
        std::fs::write(&path, "name = \"from-file\"\nmax_size_bytes = 10\nlevel = \"debug\"\n")
            .unwrap();

        let config = LoggerArgs {
            config: Some(path),
            max_size: Some(99),
            no_console: true,
            ..args()
        }
        .to_config()
        .unwrap();

        assert_eq!(config.name, "from-file");
        assert_eq!(config.max_size_bytes, 99);
        assert_eq!(config.level, Level::Debug);
        assert!(!config.console);
        assert!(config.file);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = LoggerArgs {
            config: Some(PathBuf::from("/nonexistent/fclog.toml")),
            ..args()
        }
        .to_config();
        assert!(result.is_err());

        let dir = TempDir::new().unwrap();
        let result = LoggerArgs {
            dir: Some(dir.path().to_path_buf()),
            level: Some("loud".to_string()),
            ..args()
        }
        .to_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_config() {
        let dir = TempDir::new().unwrap();
        assert_eq!(discover_config(dir.path()).unwrap(), LoggerConfig::default());

        std::fs::write(dir.path().join("fclog.json"), r#"{ "name": "discovered" }"#).unwrap();
        assert_eq!(discover_config(dir.path()).unwrap().name, "discovered");
    }
}
