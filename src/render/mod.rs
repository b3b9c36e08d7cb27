//! Text renderings of a reconstructed session.
//!
//! Renderers build a `String`; writing it anywhere is the caller's job.

mod csv;
mod structured;

use std::fmt;
use std::str::FromStr;

use chrono::{Local, TimeZone};

use crate::error::TranscriptError;
use crate::session::Session;

pub use self::csv::{csv_escape, render_csv, CSV_HEADER};
pub use self::structured::render_structured;

/// Placeholder shown for a command whose output was empty.
pub const NO_OUTPUT: &str = "(no output)";

/// Output flavor selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary followed by one block per command
    #[default]
    Structured,
    /// One row per command
    Csv,
}

impl OutputFormat {
    /// File extension used for rendered files.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Structured => "md",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TranscriptError;

    /// An empty selector means the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "structured" => Ok(OutputFormat::Structured),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(TranscriptError::UnknownOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Structured => write!(f, "structured"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a session in the given format.
pub fn render(session: &Session, format: OutputFormat) -> String {
    match format {
        OutputFormat::Structured => render_structured(session),
        OutputFormat::Csv => render_csv(session),
    }
}

/// Header timestamp as local `YYYY-MM-DD HH:MM:SS`.
pub fn format_recorded(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}
