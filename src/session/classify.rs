//! Noise classification and shell-integration marker extraction.
//!
//! Markers are read from the *raw* chunk, since cleaning removes the OSC
//! sequences that carry them. The predicates on [`Classifier`] look at the
//! *cleaned* chunk and are tuned through [`ClassifierConfig`].

use std::sync::OnceLock;

use regex::Regex;

use crate::asciicast::Header;
use crate::config::ClassifierConfig;

/// Token that introduces a percent-encoded command line.
pub const COMMAND_MARKER: &str = "cmdline_url=";

static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();
static EXIT_STATUS_REGEX: OnceLock<Regex> = OnceLock::new();
static STATUS_URL_REGEX: OnceLock<Regex> = OnceLock::new();
static WORKING_DIR_REGEX: OnceLock<Regex> = OnceLock::new();

/// True if the raw chunk announces that a command line is about to run.
pub fn is_command_boundary(raw: &str) -> bool {
    raw.contains(COMMAND_MARKER)
}

/// Decode the command line carried by a boundary chunk.
///
/// Returns `None` when there is no payload or it decodes to nothing.
pub fn extract_command(raw: &str) -> Option<String> {
    let re = COMMAND_REGEX
        .get_or_init(|| Regex::new(r"cmdline_url=([^\x07]+)").expect("Invalid command Regex"));
    let payload = re.captures(raw)?.get(1)?.as_str();
    let decoded = percent_decode(payload);
    (!decoded.is_empty()).then_some(decoded)
}

/// Exit status reported by `OSC 133;D;<code>` or `status_url=<code>`.
pub fn extract_exit_code(raw: &str) -> Option<i32> {
    let osc = EXIT_STATUS_REGEX
        .get_or_init(|| Regex::new(r"\x1b\]133;D;(\d+)\x07").expect("Invalid exit status Regex"));
    let url = STATUS_URL_REGEX
        .get_or_init(|| Regex::new(r"status_url=(\d+)").expect("Invalid status url Regex"));

    [osc, url].into_iter().find_map(|re| {
        re.captures(raw)
            .and_then(|caps| caps.get(1))
            .and_then(|code| code.as_str().parse().ok())
    })
}

/// Directory reported by `OSC 7;file://host/path`. The last report wins.
pub fn extract_working_dir(raw: &str) -> Option<String> {
    let re = WORKING_DIR_REGEX.get_or_init(|| {
        Regex::new(r"\x1b\]7;file://[^/\x07\x1b]*(/[^\x07\x1b]*)(?:\x07|\x1b\\)")
            .expect("Invalid working dir Regex")
    });
    re.captures_iter(raw)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|path| percent_decode(path.as_str()))
}

/// Decode `%XX` escapes. Malformed escapes are kept verbatim.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                decoded.push(value);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// True if nothing but control characters remain (an empty chunk counts).
pub fn is_only_control(text: &str) -> bool {
    text.chars().all(char::is_control)
}

/// Heuristic predicates separating command output from terminal noise.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classifier for one recording: `user@` becomes a prompt marker when
    /// the header names the user.
    pub fn for_header(config: &ClassifierConfig, header: &Header) -> Self {
        let classifier = Self::new(config.clone());
        match header.user() {
            Some(user) => classifier.with_prompt_marker(format!("{}@", user)),
            None => classifier,
        }
    }

    pub fn with_prompt_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.prompt_markers.push(marker.into());
        self
    }

    /// Prompt glyphs, `user@host`, `~/` paths, VCS branch decorations.
    pub fn is_prompt_chrome(&self, text: &str) -> bool {
        self.config
            .prompt_markers
            .iter()
            .any(|marker| !marker.is_empty() && text.contains(marker.as_str()))
    }

    /// Whether a chunk looks like real output rather than keystroke echo.
    pub fn is_likely_output(&self, text: &str) -> bool {
        if text.is_empty() || self.is_prompt_chrome(text) {
            return false;
        }
        if self
            .config
            .likely_output_exclusions
            .iter()
            .any(|glyph| text.contains(glyph.as_str()))
        {
            return false;
        }

        text.len() > self.config.likely_output_min_len
            || text.starts_with(|c: char| c.is_ascii_uppercase())
            || text.contains(' ')
            || text.starts_with('/')
    }

    /// Typing artifacts: partial echoes, short lowercase tokens, bare
    /// command names.
    pub fn is_junk(&self, text: &str) -> bool {
        self.config
            .junk_fragments
            .iter()
            .any(|fragment| !fragment.is_empty() && text.contains(fragment.as_str()))
            || self.is_short_token(text)
            || self.config.typing_commands.iter().any(|cmd| cmd == text)
    }

    fn is_short_token(&self, text: &str) -> bool {
        !text.is_empty()
            && text.len() <= self.config.short_token_max
            && text.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Lines dropped when a command's output is finalized.
    pub fn is_residual_noise(&self, line: &str) -> bool {
        line.is_empty()
            || self.is_prompt_chrome(line)
            || self.is_junk(line)
            || (!self.config.reset_artifact.is_empty()
                && line.contains(self.config.reset_artifact.as_str()))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
