//! Configuration module
//!
//! Resolves where content lives and how it is filtered. Precedence is
//! command-line flag, then environment variable (both arrive through clap),
//! then the optional YAML file, then built-in defaults.

pub mod loader;

use std::path::PathBuf;

use specdex_catalog::{BlogReader, DEFAULT_EXCLUDED_CATEGORIES, PublishFilter, SpecCatalog};

use crate::error::ConfigError;

pub use loader::{FileConfig, MAX_CONFIG_SIZE, load_file};

/// Content root used when nothing else is configured.
pub const DEFAULT_ROOT: &str = "../specifications";

/// Blog directory used when nothing else is configured.
pub const DEFAULT_BLOG_DIR: &str = "content/blog";

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub blog_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Deployment environment name (`production` enables the publish gate).
    pub environment: Option<String>,
}

/// Fully resolved site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub blog_dir: PathBuf,
    pub excluded_categories: Vec<String>,
    /// Site origin without a trailing slash.
    pub base_url: Option<String>,
    pub publish_filter: PublishFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            blog_dir: PathBuf::from(DEFAULT_BLOG_DIR),
            excluded_categories: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            base_url: None,
            publish_filter: PublishFilter::default(),
        }
    }
}

impl SiteConfig {
    /// Merge overrides, the optional file and defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be loaded or a value is
    /// invalid.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config {
            Some(path) => {
                tracing::info!(config = %path.display(), "loading configuration");
                load_file(path)?
            }
            None => FileConfig::default(),
        };

        let defaults = Self::default();
        let config = Self {
            root: overrides.root.clone().or(file.root).unwrap_or(defaults.root),
            blog_dir: overrides
                .blog_dir
                .clone()
                .or(file.blog_dir)
                .unwrap_or(defaults.blog_dir),
            excluded_categories: file
                .excluded_categories
                .unwrap_or(defaults.excluded_categories),
            base_url: file.base_url.map(normalize_base_url).transpose()?,
            publish_filter: PublishFilter::from_env_value(overrides.environment.as_deref()),
        };

        config.validate()?;
        tracing::debug!(
            root = %config.root.display(),
            blog_dir = %config.blog_dir.display(),
            publish_filter = ?config.publish_filter,
            "resolved configuration"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self
            .excluded_categories
            .iter()
            .find(|name| name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::InvalidValue {
                field: "excluded_categories".to_string(),
                value: bad.clone(),
                expected: "a bare directory name".to_string(),
            });
        }
        Ok(())
    }

    /// Catalog over the configured content root.
    #[must_use]
    pub fn catalog(&self) -> SpecCatalog {
        SpecCatalog::new(&self.root).with_excluded_categories(self.excluded_categories.clone())
    }

    /// Blog reader over the configured directory.
    #[must_use]
    pub fn blog(&self) -> BlogReader {
        BlogReader::new(&self.blog_dir, self.publish_filter)
    }

    /// Prefix a site-relative href with `base_url` when one is configured.
    #[must_use]
    pub fn link(&self, href: &str) -> String {
        self.base_url
            .as_ref()
            .map_or_else(|| href.to_string(), |base| format!("{base}{href}"))
    }
}

fn normalize_base_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: raw,
            expected: "an http:// or https:// URL".to_string(),
        })
    }
}
