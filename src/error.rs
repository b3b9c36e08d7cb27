//! Errors surfaced by transcript reconstruction.

use std::path::PathBuf;

/// Errors that can occur while turning a recording into a transcript.
///
/// Unparseable event lines are not represented here: they are skipped
/// and reconstruction carries on.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("header parse failure: {0}")]
    MalformedHeader(#[source] serde_json::Error),

    #[error("no session data found")]
    EmptyInput,

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("input file does not exist: {}", .0.display())]
    RecordingNotFound(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranscriptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
