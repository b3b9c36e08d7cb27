//! castscribe - command transcripts from asciinema recordings
//!
//! A recording is decoded ([`asciicast`]), its output events are cleaned and
//! classified into commands ([`session`]), and the result is rendered as
//! structured text or CSV ([`render`]). [`transcript`] ties these together.

pub mod asciicast;
pub mod cli;
pub mod config;
pub mod error;
pub mod recorder;
pub mod render;
pub mod session;
pub mod transcript;

pub use asciicast::{AsciicastFile, Event, EventType, Header};
pub use config::Config;
pub use error::TranscriptError;
pub use recorder::Recorder;
pub use render::{render, OutputFormat};
pub use session::{Command, Session};
pub use transcript::{
    default_output_path, format_lines, format_reader, format_recording, parse_session,
    write_output,
};
