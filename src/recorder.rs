//! Launches the external terminal recorder.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::config::RecordConfig;

/// Extension every recording gets.
pub const CAST_EXTENSION: &str = ".cast";

/// Runs the configured recorder (asciinema by default) in the foreground.
pub struct Recorder {
    config: RecordConfig,
}

impl Recorder {
    pub fn new(config: RecordConfig) -> Self {
        Self { config }
    }

    /// `session_<unix seconds>.cast`
    pub fn generate_filename(&self) -> String {
        format!("session_{}{}", chrono::Utc::now().timestamp(), CAST_EXTENSION)
    }

    /// Append `.cast` unless the name already ends with it.
    pub fn ensure_extension(name: &str) -> String {
        if name.ends_with(CAST_EXTENSION) {
            name.to_string()
        } else {
            format!("{}{}", name, CAST_EXTENSION)
        }
    }

    /// The program and arguments that will be run for `output`.
    pub fn command_line(&self, output: &Path) -> (String, Vec<String>) {
        let mut args = self.config.args.clone();
        args.push(output.display().to_string());
        (self.config.program.clone(), args)
    }

    /// Record into `output`, blocking until the recorder exits.
    ///
    /// The recorder inherits this process's terminal.
    pub fn record(&self, output: &Path) -> Result<()> {
        let (program, args) = self.command_line(output);
        tracing::info!(%program, ?args, "starting recorder");

        let status = Command::new(&program)
            .args(&args)
            .status()
            .with_context(|| format!("Failed to start {}", program))?;

        if !status.success() {
            bail!("{} recording failed: {}", program, status);
        }
        Ok(())
    }
}
