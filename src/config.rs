//! User configuration loaded from `~/.config/castscribe/config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub classifier: ClassifierConfig,
    pub record: RecordConfig,
}

/// Defaults for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `structured` or `csv`
    pub format: String,
    /// Delete the source recording after a successful conversion
    pub cleanup: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "structured".to_string(),
            cleanup: false,
        }
    }
}

/// Tunables for the noise heuristics.
///
/// The defaults reproduce the behavior the tool has always had. Short
/// genuine output (a bare `ok`) is dropped by `short_token_max`; lower it
/// to 0 to keep such lines at the cost of more keystroke echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Substrings that mark a chunk as prompt chrome
    pub prompt_markers: Vec<String>,
    /// Substrings left behind by character-by-character typing
    pub junk_fragments: Vec<String>,
    /// Bare command names that are echo rather than output
    pub typing_commands: Vec<String>,
    /// All-lowercase tokens up to this many letters count as typing echo
    pub short_token_max: usize,
    /// Chunks longer than this many bytes count as likely output
    pub likely_output_min_len: usize,
    /// Chunks containing any of these never count as likely output
    pub likely_output_exclusions: Vec<String>,
    /// Attribute-reset residue dropped from finished output
    pub reset_artifact: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            prompt_markers: strings(&["❯", "~/", "(main)"]),
            junk_fragments: strings(&["cho \"", "echo \"", "ec fish", "⏎", "/r/asciinemaForLLM"]),
            typing_commands: strings(&[
                "ls", "pwd", "exit", "echo", "cat", "cd", "mkdir", "rm", "cp", "mv",
            ]),
            short_token_max: 4,
            likely_output_min_len: 5,
            likely_output_exclusions: strings(&["$", "#"]),
            reset_artifact: ";0".to_string(),
        }
    }
}

/// How `castscribe record` launches the recorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    pub program: String,
    /// Arguments placed before the output filename
    pub args: Vec<String>,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            program: "asciinema".to_string(),
            args: strings(&["rec"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Path of the user config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("castscribe").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to the user config path, creating the directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
