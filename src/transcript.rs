//! Entry points: recording lines in, rendered transcript out.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::asciicast::AsciicastFile;
use crate::config::ClassifierConfig;
use crate::error::TranscriptError;
use crate::render::{render, OutputFormat};
use crate::session::Session;

/// Decode recording lines and reconstruct the session.
pub fn parse_session<I, S>(lines: I, config: &ClassifierConfig) -> Result<Session, TranscriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let recording = AsciicastFile::parse_lines(lines)?;
    Ok(Session::from_recording(recording, config))
}

/// Render recording lines (e.g. read from a pipe) as `format`.
///
/// The format is checked before anything is parsed.
pub fn format_lines<I, S>(
    lines: I,
    format: &str,
    config: &ClassifierConfig,
) -> Result<String, TranscriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let format: OutputFormat = format.parse()?;
    let session = parse_session(lines, config)?;
    Ok(render(&session, format))
}

/// Read a stream to the end, then render it.
pub fn format_reader<R: BufRead>(
    reader: R,
    format: &str,
    config: &ClassifierConfig,
) -> Result<String, TranscriptError> {
    let format: OutputFormat = format.parse()?;
    let recording = AsciicastFile::parse_reader(reader)?;
    Ok(render(&Session::from_recording(recording, config), format))
}

/// Render a recording stored on disk.
pub fn format_recording(
    path: &Path,
    format: &str,
    config: &ClassifierConfig,
) -> Result<String, TranscriptError> {
    let format: OutputFormat = format.parse()?;
    let recording = AsciicastFile::parse(path)?;
    Ok(render(&Session::from_recording(recording, config), format))
}

/// Write a rendered transcript to `path`.
pub fn write_output(path: &Path, text: &str) -> Result<(), TranscriptError> {
    fs::write(path, text).map_err(|e| TranscriptError::io(path, e))
}

/// `demo.cast` -> `demo_formatted.md` (or `.csv`), next to the input.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_formatted.{}", stem, format.extension()))
}
