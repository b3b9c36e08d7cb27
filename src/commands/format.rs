//! `castscribe format`: stdin in, transcript on stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};

use castscribe::cli::FormatArgs;
use castscribe::{format_reader, Config};

use super::resolve_format;

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &FormatArgs, config: &Config) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Reading recording from stdin (Ctrl+D to finish)...");
    }

    let stdin = io::stdin();
    let text = format_reader(stdin.lock(), resolve_format(args, config), &config.classifier)
        .context("Failed to format recording")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
