//! Error types for the `specdex` CLI
//!
//! Aggregates configuration and catalog errors and maps each to a process
//! exit code.

use specdex_catalog::CatalogError;
use thiserror::Error;

pub use specdex_core::error::ConfigError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes for `specdex` commands.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, bad value)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (missing content root, unreadable file)
    pub const IO_ERROR: i32 = 3;

    /// Requested category, specification or post does not exist
    pub const NOT_FOUND: i32 = 4;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `specdex` commands.
#[derive(Debug, Error)]
pub enum SpecdexError {
    /// Configuration loading or resolution error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog scan or read error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A lookup found nothing
    #[error("{0}")]
    NotFound(String),

    /// Arguments were syntactically valid but unusable
    #[error("{0}")]
    Usage(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecdexError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Catalog(CatalogError::Io { .. }) => ExitCode::IO_ERROR,
            Self::Catalog(_) | Self::Json(_) => ExitCode::ERROR,
            Self::NotFound(_) => ExitCode::NOT_FOUND,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
