//! `castscribe file`: convert a stored recording.

use std::path::Path;

use anyhow::{Context, Result};

use castscribe::cli::{CleanupArgs, FormatArgs};
use castscribe::{default_output_path, format_recording, write_output, Config, OutputFormat};

use super::{remove_recording, resolve_cleanup, resolve_format};

#[cfg(not(tarpaulin_include))]
pub fn handle(
    input: &Path,
    output: Option<&Path>,
    format: &FormatArgs,
    cleanup: &CleanupArgs,
    config: &Config,
) -> Result<()> {
    convert(input, output, resolve_format(format, config), config)?;

    if resolve_cleanup(cleanup, config) {
        remove_recording(input);
    }
    Ok(())
}

/// Render `input` into `output` (or the default path for the format).
pub fn convert(input: &Path, output: Option<&Path>, format: &str, config: &Config) -> Result<()> {
    let output_format: OutputFormat = format.parse()?;
    let text = format_recording(input, format, &config.classifier)
        .context("Failed to process file")?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, output_format),
    };
    write_output(&output, &text)?;

    println!("Formatted output saved to: {}", output.display());
    Ok(())
}
