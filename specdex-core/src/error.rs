//! Core error types for `specdex`
//!
//! Configuration error types shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and resolution errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

impl ConfigError {
    /// Builds a [`ConfigError::ParseError`] from a `serde_yaml` failure,
    /// keeping the line number when the parser reports one.
    #[must_use]
    pub fn from_yaml(path: PathBuf, err: &serde_yaml::Error) -> Self {
        Self::ParseError {
            path,
            line: err.location().map(|loc| loc.line()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("specdex.yaml"),
            line: Some(42),
            message: "unexpected token".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("specdex.yaml"));
        assert!(text.contains("(line 42)"));
        assert!(text.contains("unexpected token"));
    }

    #[test]
    fn test_config_error_display_without_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("specdex.yaml"),
            line: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in specdex.yaml: bad");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "excluded_categories".to_string(),
            value: String::new(),
            expected: "non-empty directory names".to_string(),
        };
        assert!(err.to_string().contains("excluded_categories"));
    }

    #[test]
    fn test_from_yaml_keeps_line() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
        let err = ConfigError::from_yaml(PathBuf::from("x.yaml"), &yaml_err);
        let ConfigError::ParseError { line, .. } = err else {
            panic!("expected ParseError");
        };
        assert!(line.is_some());
    }
}
