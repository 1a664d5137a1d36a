//! Output formatting

use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

/// One log file on disk
#[derive(Serialize)]
pub struct FileRow {
    /// Rotation suffix; `None` for the active file
    pub suffix: Option<u64>,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Summary of a stress run
#[derive(Serialize)]
pub struct StressSummary {
    pub threads: usize,
    pub lines: usize,
    pub elapsed_ms: u64,
    pub rotations: u64,
    pub files: Vec<FileRow>,
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.1}G", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1}M", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.0}K", bytes as f64 / 1024.0)
    } else if bytes > 0 {
        format!("{}B", bytes)
    } else {
        "0B".to_string()
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print logs in JSON format if enabled
pub fn print_logs(lines: &[String]) {
    if is_json_mode() {
        print_json(lines);
        return;
    }

    for line in lines {
        println!("{}", line);
    }
}

pub fn print_files(files: &[FileRow]) {
    if is_json_mode() {
        print_json(files);
        return;
    }

    if files.is_empty() {
        println!("No log files found");
        return;
    }

    for file in files {
        let label = match file.suffix {
            Some(n) => format!("#{}", n).dimmed().to_string(),
            None => "active".green().to_string(),
        };
        println!(
            "{:>8}  {:>6}  {}",
            label,
            format_bytes(file.size_bytes),
            file.path.display()
        );
    }
}

pub fn print_stress_summary(summary: &StressSummary) {
    if is_json_mode() {
        print_json(summary);
        return;
    }

    print_success(&format!(
        "Wrote {} lines from {} threads in {}ms",
        summary.lines, summary.threads, summary.elapsed_ms
    ));
    print_info(&format!("{} rotation(s)", summary.rotations));
    print_files(&summary.files);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0B");
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(2048), "2K");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0M");
        assert_eq!(format_bytes(3 * 1_073_741_824), "3.0G");
    }
}
