//! Write command implementation

use anyhow::Result;
use fclog::{CallSite, Level};

use crate::cli::WriteArgs;

pub fn execute(args: WriteArgs) -> Result<()> {
    let level: Level = args.at.parse()?;
    let logger = super::open_logger(&args.logger)?;
    let site = CallSite::caller();

    for _ in 0..args.repeat {
        for message in &args.messages {
            logger.log(level, message, site)?;
        }
    }

    Ok(())
}
