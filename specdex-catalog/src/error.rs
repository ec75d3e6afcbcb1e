//! Error types for catalog building.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning or reading content.
///
/// Malformed JSON specifications are not errors: they degrade to
/// filename-derived metadata (see [`crate::metadata::Extraction`]).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem error with the path that triggered it.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or listed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A blog post's frontmatter could not be parsed.
    #[error("invalid frontmatter in {path}: {message}")]
    Frontmatter {
        /// Path to the post.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A background category scan failed to complete.
    #[error("category scan task failed: {0}")]
    Join(String),
}

impl CatalogError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an I/O "not found" error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<tokio::task::JoinError> for CatalogError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = CatalogError::io(
            "/content/specifications",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/content/specifications"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        let err = CatalogError::Join("cancelled".to_string());
        assert!(!err.is_not_found());
        let err = CatalogError::io(
            "x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_not_found());
    }
}
