//! Flat-directory blog reader.
//!
//! Posts are `.md` or `.mdx` files whose slug is the filename stem. Each
//! may open with a YAML frontmatter block; missing fields get defaults and
//! a post is published unless it says `published: false`.

pub mod frontmatter;

use crate::error::CatalogError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Post file extensions, in lookup priority order.
pub const POST_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Title used when frontmatter has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when frontmatter has none.
pub const DEFAULT_AUTHOR: &str = "Galileo Team";

/// Which posts are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishFilter {
    /// Hide posts marked `published: false`.
    Production,
    /// Show everything.
    #[default]
    Development,
}

impl PublishFilter {
    /// `production` selects [`Self::Production`]; anything else, including
    /// an unset value, selects [`Self::Development`].
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    const fn admits(self, published: bool) -> bool {
        match self {
            Self::Production => published,
            Self::Development => true,
        }
    }
}

/// Frontmatter with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFrontmatter {
    pub title: String,
    /// Date string as written; the read time when absent.
    pub date: String,
    pub excerpt: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub published: bool,
}

impl BlogFrontmatter {
    fn from_mapping(map: &serde_yaml::Mapping) -> Self {
        Self {
            title: frontmatter::text(map, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            date: frontmatter::text(map, "date")
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            excerpt: frontmatter::text(map, "excerpt").unwrap_or_default(),
            author: frontmatter::text(map, "author")
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            tags: frontmatter::list(map, "tags"),
            cover_image: frontmatter::text(map, "coverImage"),
            published: !frontmatter::is_false(map, "published"),
        }
    }

    /// The post date, if it parses.
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

/// Listing entry: slug and frontmatter, no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostMeta {
    pub slug: String,
    pub frontmatter: BlogFrontmatter,
}

/// A full post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub frontmatter: BlogFrontmatter,
    /// Body after the frontmatter block.
    pub content: String,
}

/// Reads posts from one directory.
#[derive(Debug, Clone)]
pub struct BlogReader {
    dir: PathBuf,
    filter: PublishFilter,
}

impl BlogReader {
    pub fn new(dir: impl Into<PathBuf>, filter: PublishFilter) -> Self {
        Self {
            dir: dir.into(),
            filter,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub const fn filter(&self) -> PublishFilter {
        self.filter
    }

    /// Visible posts, newest first. Posts whose date does not parse sort
    /// after all dated posts; ties are broken by slug.
    ///
    /// A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` on read failure and
    /// `CatalogError::Frontmatter` when a post's YAML is invalid.
    pub fn all_posts(&self) -> Result<Vec<BlogPostMeta>, CatalogError> {
        let mut posts = Vec::new();
        for filename in self.post_files()? {
            let path = self.dir.join(&filename);
            let (frontmatter, _) = read_post(&path)?;
            if !self.filter.admits(frontmatter.published) {
                debug!(post = %filename, "skipping unpublished post");
                continue;
            }
            posts.push(BlogPostMeta {
                slug: slug_of(&filename).to_string(),
                frontmatter,
            });
        }

        posts.sort_by(|a, b| {
            newest_first(a.frontmatter.parsed_date(), b.frontmatter.parsed_date())
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(posts)
    }

    /// Look up one post, trying `.mdx` before `.md`.
    ///
    /// Returns `Ok(None)` when no file exists or the post is hidden by the
    /// publish filter.
    ///
    /// # Errors
    ///
    /// Same as [`Self::all_posts`].
    pub fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, CatalogError> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug == ".." {
            return Ok(None);
        }

        let Some(path) = POST_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{slug}.{ext}")))
            .find(|path| path.is_file())
        else {
            return Ok(None);
        };

        let (frontmatter, content) = read_post(&path)?;
        if !self.filter.admits(frontmatter.published) {
            return Ok(None);
        }
        Ok(Some(BlogPost {
            slug: slug.to_string(),
            frontmatter,
            content,
        }))
    }

    /// Every post slug, published or not, in filename order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the directory exists but cannot be read.
    pub fn all_slugs(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .post_files()?
            .iter()
            .map(|filename| slug_of(filename).to_string())
            .collect())
    }

    fn post_files(&self) -> Result<Vec<String>, CatalogError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "blog directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(CatalogError::io(&self.dir, e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::io(&self.dir, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_post_file(&name) {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_post_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| POST_EXTENSIONS.contains(&ext))
}

fn slug_of(filename: &str) -> &str {
    filename
        .strip_suffix(".mdx")
        .or_else(|| filename.strip_suffix(".md"))
        .unwrap_or(filename)
}

fn read_post(path: &Path) -> Result<(BlogFrontmatter, String), CatalogError> {
    let source = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let parts = frontmatter::split(&source);
    let map = match parts.yaml {
        Some(yaml) => frontmatter::parse(yaml).map_err(|message| CatalogError::Frontmatter {
            path: path.to_path_buf(),
            message,
        })?,
        None => serde_yaml::Mapping::new(),
    };
    Ok((BlogFrontmatter::from_mapping(&map), parts.body.to_string()))
}

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a frontmatter date.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD HH:MM:SS` (read as UTC), and bare `YYYY-MM-DD` dates (UTC
/// midnight).
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a date as `January 5, 2025`. Unparseable input is returned as is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_date(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%B %-d, %Y").to_string(),
    )
}
