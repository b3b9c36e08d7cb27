//! Command transcript reconstruction for shell recordings.
//!
//! Raw output chunks go through three stages:
//!
//! - [`clean`] strips escape sequences down to plain text
//! - [`classify`] reads shell-integration markers from the raw chunk and
//!   decides whether the cleaned chunk is prompt chrome, typing echo, or
//!   real output
//! - [`reconstruct`] runs a single-pass state machine that opens and
//!   closes [`Command`]s at each command boundary
//!
//! Shells are expected to report command lines with `cmdline_url=` and exit
//! status with `OSC 133;D` (fish does both out of the box).

pub mod classify;
pub mod clean;
mod reconstruct;
mod types;

pub use classify::Classifier;
pub use clean::clean_terminal_output;
pub use reconstruct::{reconstruct, Reconstructor};
pub use types::{Command, Session};

use crate::asciicast::AsciicastFile;
use crate::config::ClassifierConfig;

impl Session {
    /// Reconstruct the commands of a parsed recording.
    pub fn from_recording(recording: AsciicastFile, config: &ClassifierConfig) -> Self {
        let classifier = Classifier::for_header(config, &recording.header);
        let (commands, working_dir) = reconstruct(&recording.events, classifier);

        let working_dir = working_dir.or_else(|| {
            recording
                .header
                .env_var("PWD")
                .filter(|pwd| !pwd.is_empty())
                .map(str::to_string)
        });

        tracing::info!(
            events = recording.events.len(),
            skipped = recording.skipped_lines,
            commands = commands.len(),
            "session reconstructed"
        );

        Session {
            header: recording.header,
            commands,
            working_dir,
        }
    }
}
