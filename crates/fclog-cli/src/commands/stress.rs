//! Stress command implementation - concurrent writers through one logger

use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::cli::StressArgs;
use crate::output::{print_stress_summary, StressSummary};

pub fn execute(args: StressArgs) -> Result<()> {
    let logger = Arc::new(super::open_logger(&args.logger)?);
    let started = Instant::now();

    let handles: Vec<_> = (0..args.threads)
        .map(|t| {
            let logger = Arc::clone(&logger);
            let messages = args.messages;
            thread::spawn(move || {
                for i in 0..messages {
                    fclog::info!(logger: logger, "thread={} seq={}", t, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("Writer thread panicked"))?;
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let files = if logger.file_enabled() {
        super::collect_files(logger.logs_dir(), logger.stem())?
    } else {
        Vec::new()
    };

    print_stress_summary(&StressSummary {
        threads: args.threads,
        lines: args.threads * args.messages,
        elapsed_ms,
        rotations: logger.rotations(),
        files,
    });
    Ok(())
}
