//! Metadata extraction for specification files.
//!
//! Markdown documents carry bold-text markers (`**Status:** Active`) in
//! place of structured frontmatter; JSON and JSON-LD documents carry
//! `title`/`name`/`$id` fields. Extraction never fails: a JSON file that
//! does not parse degrades to filename-derived defaults, and the
//! [`Extraction`] variant records which path produced the result.

pub mod json;
pub mod markdown;

use crate::title::humanize_filename;
use specdex_core::{DocumentType, SpecMetadata, SpecStatus};

/// Version reported when a document does not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Outcome of extracting metadata from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Metadata read from the document itself.
    Parsed(SpecMetadata),
    /// Filename-derived defaults, used when the content could not be parsed.
    Fallback(SpecMetadata),
}

impl Extraction {
    /// The extracted metadata, whichever path produced it.
    #[must_use]
    pub fn into_metadata(self) -> SpecMetadata {
        match self {
            Self::Parsed(meta) | Self::Fallback(meta) => meta,
        }
    }

    /// Borrow the extracted metadata.
    #[must_use]
    pub const fn metadata(&self) -> &SpecMetadata {
        match self {
            Self::Parsed(meta) | Self::Fallback(meta) => meta,
        }
    }

    /// Whether the defaults path was taken.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Extract metadata from a file's content, dispatching on its extension.
///
/// Files without a supported extension get [`default_metadata`].
#[must_use]
pub fn extract_metadata(content: &str, filename: &str) -> Extraction {
    let document_type = filename
        .rsplit_once('.')
        .and_then(|(_, ext)| DocumentType::from_extension(ext));

    match document_type {
        Some(kind) if kind.is_json() => json::parse(content, filename),
        Some(_) => Extraction::Parsed(markdown::parse(content)),
        None => Extraction::Fallback(default_metadata(filename)),
    }
}

/// Metadata used when a file cannot be parsed: a filename-derived title,
/// `Draft` status and the default version.
#[must_use]
pub fn default_metadata(filename: &str) -> SpecMetadata {
    SpecMetadata {
        title: humanize_filename(filename),
        status: SpecStatus::Draft,
        version: DEFAULT_VERSION.to_string(),
        last_updated: String::new(),
        spec_id: None,
    }
}
