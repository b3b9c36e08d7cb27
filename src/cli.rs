//! Command-line definitions, shared with `xtask` for man page generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("CASTSCRIBE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CASTSCRIBE_BUILD_DATE"),
    ")"
);

/// Turn asciinema recordings into command transcripts.
#[derive(Debug, Parser)]
#[command(name = "castscribe", version = VERSION, about, long_about = None)]
#[command(after_help = "\
Examples:
  castscribe record my_session.cast --output=csv --cleanup
  castscribe file demo.cast --output=csv
  cat demo.cast | castscribe format

Without a command, castscribe formats a recording read from stdin.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a recording from stdin and print the transcript
    Format(FormatArgs),

    /// Convert an existing recording file
    File {
        /// Recording to convert
        input: PathBuf,

        /// Where to write the transcript [default: <INPUT>_formatted.md or .csv]
        #[arg(value_name = "OUTPUT")]
        output_file: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cleanup: CleanupArgs,
    },

    /// Record a new session with asciinema, then convert it
    Record {
        /// Recording filename [default: session_<timestamp>.cast]
        #[arg(value_name = "OUTPUT")]
        output_file: Option<String>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cleanup: CleanupArgs,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Output format: structured or csv [default: from config, else structured]
    #[arg(long = "output", value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CleanupArgs {
    /// Delete the .cast file after converting it
    #[arg(long)]
    pub cleanup: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration to the config file if none exists
    Init,
}
