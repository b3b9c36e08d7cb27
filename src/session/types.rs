//! Reconstructed session data.

use crate::asciicast::Header;

/// One command recovered from the recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Command line as typed, percent-decoded
    pub command: String,
    /// Time of the event that revealed the command (seconds)
    pub start_time: f64,
    /// Time of the last event attributed to the command (seconds)
    pub end_time: f64,
    /// Cleaned output, one line per `\n`; empty when nothing survived
    pub output: String,
    pub exit_code: i32,
    pub is_complete: bool,
}

impl Command {
    pub fn new(command: impl Into<String>, start_time: f64) -> Self {
        Self {
            command: command.into(),
            start_time,
            end_time: start_time,
            output: String::new(),
            exit_code: 0,
            is_complete: false,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }
}

/// A reconstructed recording: header plus commands in boundary order.
#[derive(Debug, Clone)]
pub struct Session {
    pub header: Header,
    pub commands: Vec<Command>,
    /// Last directory the shell reported, else `PWD` from the header env
    pub working_dir: Option<String>,
}

impl Session {
    pub fn shell_name(&self) -> &str {
        self.header.shell_name()
    }
}
