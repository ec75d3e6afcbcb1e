//! Filesystem-backed specification catalog.
//!
//! The content root holds one directory per category. A category holds
//! specification files directly and/or in subcategory directories. Every
//! query re-reads the filesystem; there is no cache to invalidate.

use crate::error::CatalogError;
use crate::metadata::extract_metadata;
use crate::routes::parse_route_slug;
use specdex_core::{DocumentType, SUPPORTED_EXTENSIONS, SpecContent, SpecDocument};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Category directories that hold source code rather than specifications.
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &["contracts"];

/// Read-only view over a specification content tree.
#[derive(Debug, Clone)]
pub struct SpecCatalog {
    root: PathBuf,
    excluded: Vec<String>,
}

impl SpecCatalog {
    /// Catalog rooted at `root` with the default excluded categories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Replace the excluded category list.
    #[must_use]
    pub fn with_excluded_categories<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Category names that are never listed.
    #[must_use]
    pub fn excluded_categories(&self) -> &[String] {
        &self.excluded
    }

    /// List category directories under the root, sorted, minus exclusions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the root cannot be read.
    pub fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = list_dir(&self.root)?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .filter(|name| !self.excluded.iter().any(|ex| ex == name))
            .collect();
        categories.sort();
        Ok(categories)
    }

    /// Every specification in a category, including nested directories,
    /// sorted by title.
    ///
    /// Documents below the category root record the first-level directory
    /// name as their subcategory, however deep they sit.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the category directory or one of its
    /// files cannot be read.
    pub fn specifications(&self, category: &str) -> Result<Vec<SpecDocument>, CatalogError> {
        let category_path = self.root.join(category);
        let mut specs = Vec::new();
        collect_specs(&category_path, category, None, &mut specs)?;
        specs.sort_by(compare_by_title);
        debug!(category, count = specs.len(), "collected specifications");
        Ok(specs)
    }

    /// Number of specifications in a category.
    ///
    /// # Errors
    ///
    /// Same as [`Self::specifications`].
    pub fn spec_count(&self, category: &str) -> Result<usize, CatalogError> {
        Ok(self.specifications(category)?.len())
    }

    /// Resolve one document to its content and metadata.
    ///
    /// Extensions are tried in [`SUPPORTED_EXTENSIONS`] order. Without a
    /// subcategory, a miss at the category root falls back to every
    /// subdirectory in ascending name order; the first hit wins.
    /// `Ok(None)` means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a matching file cannot be read, or if
    /// the category directory cannot be listed during the fallback search.
    pub fn specification(
        &self,
        category: &str,
        slug: &str,
        subcategory: Option<&str>,
    ) -> Result<Option<SpecContent>, CatalogError> {
        if ![category, slug]
            .into_iter()
            .chain(subcategory)
            .all(is_safe_segment)
        {
            debug!(category, slug, ?subcategory, "rejecting unsafe path segment");
            return Ok(None);
        }

        let category_path = self.root.join(category);
        let base = subcategory.map_or_else(|| category_path.clone(), |sub| category_path.join(sub));

        for ext in SUPPORTED_EXTENSIONS {
            let filename = format!("{slug}.{ext}");
            let path = base.join(&filename);
            if !path.is_file() {
                trace!(path = %path.display(), "no candidate");
                continue;
            }
            let content = read_lossy(&path)?;
            let metadata = extract_metadata(&content, &filename).into_metadata();
            let document_type = DocumentType::from_extension(ext).unwrap_or(DocumentType::Markdown);
            debug!(path = %path.display(), "resolved specification");
            return Ok(Some(SpecContent {
                document_type,
                content,
                metadata,
            }));
        }

        if subcategory.is_some() {
            return Ok(None);
        }

        let mut subdirs: Vec<String> = list_dir(&category_path)?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .collect();
        subdirs.sort();

        for sub in &subdirs {
            if let Some(found) = self.specification(category, slug, Some(sub.as_str()))? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }

    /// Resolve a catch-all route slug (`[slug]` or `[subcategory, slug]`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::specification`].
    pub fn specification_by_route(
        &self,
        category: &str,
        parts: &[String],
    ) -> Result<Option<SpecContent>, CatalogError> {
        match parse_route_slug(parts) {
            Some((subcategory, slug)) => self.specification(category, slug, subcategory),
            None => Ok(None),
        }
    }
}

struct DirEntryInfo {
    name: String,
    is_dir: bool,
    is_file: bool,
}

fn list_dir(dir: &Path) -> Result<Vec<DirEntryInfo>, CatalogError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))? {
        let entry = entry.map_err(|e| CatalogError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| CatalogError::io(entry.path(), e))?;
        let Ok(name) = entry.file_name().into_string() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 entry name");
            continue;
        };
        entries.push(DirEntryInfo {
            name,
            is_dir: file_type.is_dir(),
            is_file: file_type.is_file(),
        });
    }
    Ok(entries)
}

fn collect_specs(
    dir: &Path,
    category: &str,
    subcategory: Option<&str>,
    specs: &mut Vec<SpecDocument>,
) -> Result<(), CatalogError> {
    for entry in list_dir(dir)? {
        let path = dir.join(&entry.name);

        if entry.is_dir {
            let nested = subcategory.unwrap_or(&entry.name);
            collect_specs(&path, category, Some(nested), specs)?;
        } else if entry.is_file {
            let Some(document_type) = DocumentType::from_path(&path) else {
                trace!(path = %path.display(), "ignoring unsupported file");
                continue;
            };
            let content = read_lossy(&path)?;
            let metadata = extract_metadata(&content, &entry.name).into_metadata();
            specs.push(SpecDocument::new(
                category,
                subcategory,
                &entry.name,
                document_type,
                metadata,
            ));
        }
    }
    Ok(())
}

fn read_lossy(path: &Path) -> Result<String, CatalogError> {
    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}

fn compare_by_title(a: &SpecDocument, b: &SpecDocument) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.subcategory.cmp(&b.subcategory))
        .then_with(|| a.slug.cmp(&b.slug))
        .then_with(|| a.filename.cmp(&b.filename))
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}
