//! Site configuration file loader.
//!
//! The file is optional YAML. Every field is optional; anything unknown is
//! rejected so typos surface instead of being silently ignored.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Largest configuration file accepted, in bytes.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Raw contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Specification content root.
    pub root: Option<PathBuf>,
    /// Blog post directory.
    pub blog_dir: Option<PathBuf>,
    /// Category directories never listed.
    pub excluded_categories: Option<Vec<String>>,
    /// Site origin used to print absolute links.
    pub base_url: Option<String>,
}

impl FileConfig {
    /// Resolve relative paths against `dir`.
    #[must_use]
    pub fn relative_to(mut self, dir: &Path) -> Self {
        self.root = self.root.map(|p| anchor(dir, p));
        self.blog_dir = self.blog_dir.map(|p| anchor(dir, p));
        self
    }
}

fn anchor(dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        dir.join(path)
    }
}

/// Load a configuration file.
///
/// An empty file (or one holding only comments) yields all-`None` fields.
/// Relative paths in the file are resolved against the file's directory.
///
/// # Errors
///
/// - `ConfigError::MissingFile` if the file cannot be read
/// - `ConfigError::InvalidValue` if it exceeds [`MAX_CONFIG_SIZE`]
/// - `ConfigError::ParseError` for malformed YAML or unknown keys
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;
    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(ConfigError::InvalidValue {
            field: "file_size".to_string(),
            value: format!("{} bytes", metadata.len()),
            expected: format!("at most {MAX_CONFIG_SIZE} bytes"),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let value: Value =
        serde_yaml::from_str(raw).map_err(|e| ConfigError::from_yaml(path.to_path_buf(), &e))?;
    if value.is_null() {
        tracing::debug!(config = %path.display(), "configuration file is empty");
        return Ok(FileConfig::default());
    }

    let config: FileConfig = serde_yaml::from_value(value).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: None,
        message: e.to_string(),
    })?;

    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.relative_to(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("specdex.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = write(
            temp.path(),
            "root: specs\nblog_dir: /srv/blog\nexcluded_categories: [contracts, drafts]\nbase_url: https://example.org\n",
        );
        let config = load_file(&path).unwrap();
        assert_eq!(config.root, Some(temp.path().join("specs")));
        assert_eq!(config.blog_dir, Some(PathBuf::from("/srv/blog")));
        assert_eq!(
            config.excluded_categories,
            Some(vec!["contracts".to_string(), "drafts".to_string()])
        );
        assert_eq!(config.base_url.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "# nothing configured yet\n");
        assert_eq!(load_file(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "rot: specs\n");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
        assert!(err.to_string().contains("rot"), "{err}");
    }

    #[test]
    fn test_malformed_yaml_reports_line() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "root: specs\nexcluded_categories: [a, b\n");
        match load_file(&path).unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_file(&temp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn test_bom_is_ignored() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "\u{feff}base_url: https://example.org\n");
        assert!(load_file(&path).unwrap().base_url.is_some());
    }
}
