//! Shell completion generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};

/// Print a completion script for the requested shell to stdout.
pub fn run(args: &CompletionsArgs) {
    render(args.shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`.
fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
