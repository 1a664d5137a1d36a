//! Files command implementation

use anyhow::Result;
use fclog::constants::log_stem;
use fclog_core::validate_log_name;

use crate::cli::FilesArgs;
use crate::output::print_files;

pub fn execute(args: FilesArgs) -> Result<()> {
    validate_log_name(&args.name)?;
    validate_log_name(&args.pid)?;

    let stem = log_stem(&args.name, &args.pid);
    let files = super::collect_files(&args.dir, &stem)?;
    print_files(&files);
    Ok(())
}
