//! CLI argument definitions
//!
//! All Clap derive structs for `specdex` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use specdex_core::{DocumentType, SpecStatus};

use crate::config::ConfigOverrides;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Browse protocol specifications and blog posts from a content tree.
#[derive(Parser, Debug)]
#[command(name = "specdex", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Specification content root.
    #[arg(long, global = true, env = "SPECDEX_ROOT")]
    pub root: Option<PathBuf>,

    /// Blog post directory.
    #[arg(long, global = true, env = "SPECDEX_BLOG_DIR")]
    pub blog_dir: Option<PathBuf>,

    /// Path to a YAML configuration file.
    #[arg(short, long, global = true, env = "SPECDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Deployment environment; `production` hides unpublished posts.
    #[arg(long = "env", global = true, env = "SPECDEX_ENV", hide = true)]
    pub environment: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SPECDEX_COLOR")]
    pub color: ColorChoice,
}

impl Cli {
    /// Configuration values carried by global flags and the environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            blog_dir: self.blog_dir.clone(),
            config: self.config.clone(),
            environment: self.environment.clone(),
        }
    }
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the specification catalog.
    Specs(SpecsCommand),

    /// Read blog posts.
    Blog(BlogCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Specs Command
// ============================================================================

/// Specification catalog commands.
#[derive(Args, Debug)]
pub struct SpecsCommand {
    #[command(subcommand)]
    pub subcommand: SpecsSubcommand,
}

/// Specification subcommands.
#[derive(Subcommand, Debug)]
pub enum SpecsSubcommand {
    /// List categories with their document counts.
    Categories(FormatArgs),

    /// List the documents in a category, sorted by title.
    List(SpecsListArgs),

    /// Show one document with its metadata.
    Show(SpecsShowArgs),

    /// Print the navigation tree.
    Nav(SpecsNavArgs),

    /// Print static route parameters for every document.
    Routes(FormatArgs),
}

/// Arguments for `specs list`.
#[derive(Args, Debug)]
pub struct SpecsListArgs {
    /// Category directory name.
    pub category: String,

    /// Only documents with this status.
    #[arg(long)]
    pub status: Option<SpecStatus>,

    /// Only documents of this type.
    #[arg(long = "type")]
    pub document_type: Option<DocumentType>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `specs show`.
#[derive(Args, Debug)]
pub struct SpecsShowArgs {
    /// Category directory name.
    pub category: String,

    /// Document slug, or `subcategory/slug`.
    pub slug: String,

    /// Subcategory directory; searched exclusively when given.
    #[arg(short, long)]
    pub subcategory: Option<String>,

    /// Print only the raw file content.
    #[arg(long, conflicts_with = "format")]
    pub raw: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `specs nav`.
#[derive(Args, Debug)]
pub struct SpecsNavArgs {
    /// Restrict to one category.
    #[arg(long)]
    pub category: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Blog Command
// ============================================================================

/// Blog commands.
#[derive(Args, Debug)]
pub struct BlogCommand {
    #[command(subcommand)]
    pub subcommand: BlogSubcommand,
}

/// Blog subcommands.
#[derive(Subcommand, Debug)]
pub enum BlogSubcommand {
    /// List visible posts, newest first.
    List(FormatArgs),

    /// Show one post.
    Show(BlogShowArgs),

    /// List every post slug, including unpublished ones.
    Slugs(FormatArgs),
}

/// Arguments for `blog show`.
#[derive(Args, Debug)]
pub struct BlogShowArgs {
    /// Post slug (filename without extension).
    pub slug: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Shared / Completions / Version
// ============================================================================

/// Output format only.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: clap_complete::Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_list_with_filters() {
        let cli = Cli::try_parse_from([
            "specdex", "specs", "list", "schemas", "--status", "standard", "--type", "jsonld",
        ])
        .unwrap();
        let Commands::Specs(cmd) = cli.command else {
            panic!("expected specs command");
        };
        let SpecsSubcommand::List(args) = cmd.subcommand else {
            panic!("expected specs list");
        };
        assert_eq!(args.category, "schemas");
        assert_eq!(args.status, Some(SpecStatus::Standard));
        assert_eq!(args.document_type, Some(DocumentType::JsonLd));
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn test_global_root_after_subcommand() {
        let cli =
            Cli::try_parse_from(["specdex", "specs", "categories", "--root", "/content"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/content")));
        assert_eq!(cli.overrides().root, Some(PathBuf::from("/content")));
    }

    #[test]
    fn test_show_raw_conflicts_with_format() {
        let result = Cli::try_parse_from([
            "specdex", "specs", "show", "identity", "overview", "--raw", "--format", "json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_with_subcategory() {
        let cli = Cli::try_parse_from([
            "specdex",
            "specs",
            "show",
            "identity",
            "topics",
            "--subcategory",
            "claims",
        ])
        .unwrap();
        let Commands::Specs(SpecsCommand {
            subcommand: SpecsSubcommand::Show(args),
        }) = cli.command
        else {
            panic!("expected specs show");
        };
        assert_eq!(args.subcategory.as_deref(), Some("claims"));
        assert!(!args.raw);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result =
            Cli::try_parse_from(["specdex", "specs", "list", "token", "--status", "final"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["specdex", "-vvv", "blog", "list"]).unwrap();
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_format, LogFormat::Human);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["specdex", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["specdex", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
