//! Shell completion output.

use clap::CommandFactory;
use clap_complete::Shell;

use castscribe::cli::Cli;

pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "castscribe", &mut std::io::stdout());
}
