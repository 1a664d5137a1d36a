//! Tail command implementation

use anyhow::{bail, Result};
use fclog::LogReader;
use regex::Regex;

use crate::cli::TailArgs;
use crate::output::print_logs;

pub fn execute(args: TailArgs) -> Result<()> {
    let reader = LogReader::new(args.path);
    if !reader.exists() {
        bail!("Log file not found: {}", reader.path().display());
    }

    // Compile grep pattern if provided
    let grep_regex = if let Some(pattern) = &args.grep {
        Some(Regex::new(pattern).map_err(|e| anyhow::anyhow!("Invalid regex pattern: {}", e))?)
    } else {
        None
    };

    // Filter before taking the tail so --lines counts matching lines
    let lines = match grep_regex {
        Some(regex) => {
            let matching: Vec<String> = reader
                .lines()?
                .into_iter()
                .filter(|line| regex.is_match(line))
                .collect();
            let skip = matching.len().saturating_sub(args.lines);
            matching.into_iter().skip(skip).collect()
        }
        None => reader.tail(args.lines)?,
    };

    print_logs(&lines);
    Ok(())
}
