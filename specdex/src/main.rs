//! `specdex` - browse a protocol's specification and blog content

use clap::Parser;

use specdex::cli::args::Cli;
use specdex::cli::commands;
use specdex::error::ExitCode;
use specdex::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
