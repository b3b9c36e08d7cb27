//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod file;
pub mod format;
pub mod record;

use std::path::Path;

use castscribe::cli::{CleanupArgs, FormatArgs};
use castscribe::Config;

/// `--output` wins over the configured default.
pub fn resolve_format<'a>(args: &'a FormatArgs, config: &'a Config) -> &'a str {
    args.format.as_deref().unwrap_or(config.output.format.as_str())
}

pub fn resolve_cleanup(args: &CleanupArgs, config: &Config) -> bool {
    args.cleanup || config.output.cleanup
}

/// Delete a converted recording. Failure is reported, not fatal.
pub fn remove_recording(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => println!("Original file {} removed.", path.display()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cleanup failed");
            println!(
                "Warning: failed to remove original file {}: {}",
                path.display(),
                e
            );
        }
    }
}
