//! Escape-sequence canonicalization.
//!
//! Turns a raw output chunk into plain text: control sequences removed,
//! line endings normalized to `\n`, surrounding whitespace trimmed.

use std::sync::OnceLock;

use regex::Regex;

static CSI_REGEX: OnceLock<Regex> = OnceLock::new();
static OSC_REGEX: OnceLock<Regex> = OnceLock::new();
static PRIVATE_MODE_REGEX: OnceLock<Regex> = OnceLock::new();
static LINE_ENDING_REGEX: OnceLock<Regex> = OnceLock::new();

/// Charset selection, bare SGR reset, keypad application/numeric mode.
const LEGACY_SEQUENCES: &[&str] = &["\x1b(B", "\x1b[m", "\x1b=", "\x1b>"];

/// NUL, BEL, backspace, form feed, shift-out, shift-in.
const STRIPPED_CONTROLS: &[char] = &['\x00', '\x07', '\x08', '\x0c', '\x0e', '\x0f'];

fn csi_regex() -> &'static Regex {
    CSI_REGEX.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("Invalid CSI Regex"))
}

fn osc_regex() -> &'static Regex {
    OSC_REGEX.get_or_init(|| Regex::new(r"\x1b\][^\x07]*\x07").expect("Invalid OSC Regex"))
}

fn private_mode_regex() -> &'static Regex {
    PRIVATE_MODE_REGEX.get_or_init(|| {
        Regex::new(r"\x1b[\[\]><=?][^a-zA-Z]*[a-zA-Z]").expect("Invalid private mode Regex")
    })
}

fn line_ending_regex() -> &'static Regex {
    LINE_ENDING_REGEX.get_or_init(|| Regex::new(r"\r\n|\r").expect("Invalid line ending Regex"))
}

/// Strip terminal control sequences from a raw chunk.
///
/// Idempotent: removing one sequence can splice bytes into a new one
/// (`ESC NUL [31m`), so passes repeat until the text stops changing.
pub fn clean_terminal_output(raw: &str) -> String {
    let mut current = strip_once(raw);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(data: &str) -> String {
    let cleaned = csi_regex().replace_all(data, "");
    let cleaned = osc_regex().replace_all(&cleaned, "");
    let mut cleaned = private_mode_regex().replace_all(&cleaned, "").into_owned();

    for seq in LEGACY_SEQUENCES {
        if cleaned.contains(seq) {
            cleaned = cleaned.replace(seq, "");
        }
    }

    cleaned.retain(|c| !STRIPPED_CONTROLS.contains(&c));

    line_ending_regex()
        .replace_all(&cleaned, "\n")
        .trim()
        .to_string()
}
