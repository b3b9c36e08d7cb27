//! `castscribe record`: record with asciinema, then convert.

use std::path::PathBuf;

use anyhow::Result;

use castscribe::cli::{CleanupArgs, FormatArgs};
use castscribe::{Config, Recorder};

use super::{remove_recording, resolve_cleanup, resolve_format};

#[cfg(not(tarpaulin_include))]
pub fn handle(
    output: Option<&str>,
    format: &FormatArgs,
    cleanup: &CleanupArgs,
    config: &Config,
) -> Result<()> {
    // Reject a bad --output before the user spends time recording
    let format = resolve_format(format, config);
    format.parse::<castscribe::OutputFormat>()?;

    let recorder = Recorder::new(config.record.clone());
    let filename = match output {
        Some(name) => Recorder::ensure_extension(name),
        None => recorder.generate_filename(),
    };
    let path = PathBuf::from(filename);

    println!("Starting recording...");
    println!("Recording will be saved to: {}", path.display());
    println!("Press Ctrl+D or type 'exit' to stop recording.\n");

    recorder.record(&path)?;

    println!("\nRecording completed: {}", path.display());

    super::file::convert(&path, None, format, config)?;

    if resolve_cleanup(cleanup, config) {
        remove_recording(&path);
    }
    Ok(())
}
