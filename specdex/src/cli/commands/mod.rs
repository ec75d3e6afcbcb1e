//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod blog;
pub mod completions;
pub mod specs;
pub mod version;

use crate::cli::args::{BlogSubcommand, Cli, Commands, SpecsSubcommand};
use crate::config::SiteConfig;
use crate::error::SpecdexError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// Configuration is only resolved for commands that read content.
///
/// # Errors
///
/// Returns an error if configuration fails to resolve or the dispatched
/// command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), SpecdexError> {
    match &cli.command {
        Commands::Specs(cmd) => {
            let config = SiteConfig::resolve(&cli.overrides())?;
            match &cmd.subcommand {
                SpecsSubcommand::Categories(args) => specs::categories(&config, args).await,
                SpecsSubcommand::List(args) => specs::list(&config, args),
                SpecsSubcommand::Show(args) => specs::show(&config, args),
                SpecsSubcommand::Nav(args) => specs::nav(&config, args).await,
                SpecsSubcommand::Routes(args) => specs::routes(&config, args),
            }
        }
        Commands::Blog(cmd) => {
            let config = SiteConfig::resolve(&cli.overrides())?;
            match &cmd.subcommand {
                BlogSubcommand::List(args) => blog::list(&config, args),
                BlogSubcommand::Show(args) => blog::show(&config, args),
                BlogSubcommand::Slugs(args) => blog::slugs(&config, args),
            }
        }
        Commands::Completions(args) => {
            completions::run(args);
            Ok(())
        }
        Commands::Version(args) => version::run(args),
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), SpecdexError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
