//! asciicast v2 recording reader
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v2/
//!
//! The first line of a recording is a JSON header object; every following
//! non-blank line is an event array `[time, code, data]` where `time` is
//! seconds since the start of the recording.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::error::TranscriptError;

/// Shell name used when the header does not say which shell was recorded.
pub const UNKNOWN_SHELL: &str = "unknown";

/// asciicast v2 header
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Header {
    pub version: u32,
    pub width: u32,
    pub height: u32,
    /// Recording start, seconds since the Unix epoch
    pub timestamp: i64,
    pub env: Option<HashMap<String, String>>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: 2,
            width: 80,
            height: 24,
            timestamp: 0,
            env: None,
        }
    }
}

impl Header {
    /// Parse the header line. Anything other than a JSON object is rejected.
    pub fn from_json(line: &str) -> std::result::Result<Self, TranscriptError> {
        let value: serde_json::Value =
            serde_json::from_str(line).map_err(TranscriptError::MalformedHeader)?;

        if !value.is_object() {
            return Err(TranscriptError::MalformedHeader(
                <serde_json::Error as serde::de::Error>::custom("header must be a JSON object"),
            ));
        }

        serde_json::from_value(value).map_err(TranscriptError::MalformedHeader)
    }

    /// Look up a variable from the recorded environment.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .as_ref()
            .and_then(|env| env.get(key))
            .map(String::as_str)
    }

    /// Shell name derived from `SHELL` (e.g. `/usr/bin/fish` -> `fish`).
    pub fn shell_name(&self) -> &str {
        self.env_var("SHELL")
            .and_then(|shell| shell.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_SHELL)
    }

    /// Login name of the recording user, if the environment carries one.
    pub fn user(&self) -> Option<&str> {
        self.env_var("USER")
            .or_else(|| self.env_var("LOGNAME"))
            .filter(|user| !user.is_empty())
    }
}

/// Event type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Output (data written to terminal)
    Output, // "o"
    /// Input (data read from terminal)
    Input, // "i"
    /// Marker (annotation)
    Marker, // "m"
    /// Resize (terminal resize)
    Resize, // "r"
    /// Exit (process exit code)
    Exit, // "x"
    /// Any code this reader does not know about
    Other,
}

impl EventType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "o" => EventType::Output,
            "i" => EventType::Input,
            "m" => EventType::Marker,
            "r" => EventType::Resize,
            "x" => EventType::Exit,
            _ => EventType::Other,
        }
    }
}

/// An event in the asciicast file
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the start of the recording
    pub time: f64,
    /// Event type
    pub event_type: EventType,
    /// Event data (output text, marker label, etc.)
    pub data: String,
}

impl Event {
    pub fn new(time: f64, event_type: EventType, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type,
            data: data.into(),
        }
    }

    pub fn output(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventType::Output, data)
    }

    pub fn input(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventType::Input, data)
    }

    pub fn is_output(&self) -> bool {
        self.event_type == EventType::Output
    }

    /// Parse an event from a JSON line
    ///
    /// Elements past the third are ignored.
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }

        let time = arr[0].as_f64().context("Event time must be a number")?;

        let code = arr[1].as_str().context("Event type must be a string")?;

        let data = arr[2]
            .as_str()
            .context("Event data must be a string")?
            .to_string();

        Ok(Event {
            time,
            event_type: EventType::from_code(code),
            data,
        })
    }
}

/// Complete asciicast file representation
#[derive(Debug, Clone)]
pub struct AsciicastFile {
    pub header: Header,
    pub events: Vec<Event>,
    /// Number of event lines that could not be decoded and were dropped
    pub skipped_lines: usize,
}

impl AsciicastFile {
    /// Parse a recording from a path
    pub fn parse<P: AsRef<Path>>(path: P) -> std::result::Result<Self, TranscriptError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TranscriptError::RecordingNotFound(path.to_path_buf()));
        }
        let file = fs::File::open(path).map_err(|e| TranscriptError::io(path, e))?;

        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a recording from a reader, consuming it to the end
    ///
    /// Invalid UTF-8 is replaced with U+FFFD per line, so one bad byte
    /// cannot take down the rest of the recording.
    pub fn parse_reader<R: BufRead>(reader: R) -> std::result::Result<Self, TranscriptError> {
        let mut lines = Vec::new();
        for chunk in reader.split(b'\n') {
            let mut bytes = chunk?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            lines.push(String::from_utf8_lossy(&bytes).into_owned());
        }
        Self::parse_lines(lines)
    }

    /// Parse from a string
    pub fn parse_str(content: &str) -> std::result::Result<Self, TranscriptError> {
        Self::parse_lines(content.lines())
    }

    /// Parse already-split lines.
    ///
    /// The header must parse; event lines that do not are skipped.
    pub fn parse_lines<I, S>(lines: I) -> std::result::Result<Self, TranscriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let header_line = lines.next().ok_or(TranscriptError::EmptyInput)?;
        let header = Header::from_json(header_line.as_ref())?;

        let mut events = Vec::new();
        let mut skipped_lines = 0;
        for (line_num, line) in lines.enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }

            match Event::from_json(line) {
                Ok(event) => events.push(event),
                Err(e) => {
                    skipped_lines += 1;
                    tracing::debug!(line = line_num + 2, error = %e, "skipping event line");
                }
            }
        }

        Ok(AsciicastFile {
            header,
            events,
            skipped_lines,
        })
    }
}
