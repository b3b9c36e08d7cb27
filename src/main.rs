//! castscribe binary: argument parsing, I/O, and logging setup.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use castscribe::cli::{Cli, Commands, ConfigCommands, FormatArgs};
use castscribe::Config;

/// `RUST_LOG`, then `CASTSCRIBE_LOG`, then `warn`.
fn log_filter() -> EnvFilter {
    let level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("CASTSCRIBE_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(not(tarpaulin_include))]
fn main() {
    // stdout carries transcripts; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        None => commands::format::handle(&FormatArgs::default(), &config),
        Some(Commands::Format(args)) => commands::format::handle(&args, &config),
        Some(Commands::File {
            input,
            output_file,
            format,
            cleanup,
        }) => commands::file::handle(&input, output_file.as_deref(), &format, &cleanup, &config),
        Some(Commands::Record {
            output_file,
            format,
            cleanup,
        }) => commands::record::handle(output_file.as_deref(), &format, &cleanup, &config),
        Some(Commands::Config(ConfigCommands::Show)) => commands::config::handle_show(&config),
        Some(Commands::Config(ConfigCommands::Path)) => commands::config::handle_path(),
        Some(Commands::Config(ConfigCommands::Init)) => commands::config::handle_init(),
        Some(Commands::Completions { shell }) => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
