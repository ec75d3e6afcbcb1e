//! Specification catalog data model
//!
//! These types describe what the catalog derives from the content tree:
//! documents with display metadata, resolved content, navigation leaves
//! and static route parameters. Field names serialize in camelCase so the
//! JSON output lines up with what the page-rendering layer consumes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// File extensions recognised as specification documents, in resolver
/// priority order.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["md", "json", "jsonld"];

// ============================================================================
// Document Type
// ============================================================================

/// Kind of specification document, derived solely from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// `.md` prose specification with bold-text markers.
    Markdown,
    /// `.json` schema.
    Json,
    /// `.jsonld` linked-data context or schema.
    #[cfg_attr(feature = "clap", value(name = "jsonld"))]
    JsonLd,
}

impl DocumentType {
    /// Maps a bare extension (no leading dot, any case) to a document type.
    ///
    /// Returns `None` for anything outside [`SUPPORTED_EXTENSIONS`].
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "jsonld" => Some(Self::JsonLd),
            _ => None,
        }
    }

    /// Classifies a path by its final extension. No content sniffing.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the JSON metadata path applies.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::JsonLd)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::JsonLd => write!(f, "jsonld"),
        }
    }
}

// ============================================================================
// Status
// ============================================================================

/// Maturity of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SpecStatus {
    /// Work in progress; also the bucket for missing or unknown values.
    #[default]
    Draft,
    /// In force.
    Active,
    /// Stable standard. JSON schemas always land here.
    Standard,
}

impl SpecStatus {
    /// Normalizes a free-form status marker value.
    ///
    /// Matching is case-insensitive: `active` maps to `Active`, `standard`
    /// and `stable` map to `Standard`, everything else (including the empty
    /// string) maps to `Draft`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "active" => Self::Active,
            "standard" | "stable" => Self::Standard,
            _ => Self::Draft,
        }
    }

    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Standard => "Standard",
        }
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Metadata and Documents
// ============================================================================

/// Display metadata extracted from a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMetadata {
    /// Human-readable title.
    pub title: String,

    /// Normalized status.
    pub status: SpecStatus,

    /// Semantic-version-shaped string.
    pub version: String,

    /// Free-form date string; empty when unknown.
    pub last_updated: String,

    /// Opaque specification identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
}

/// One addressable specification file with its derived metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDocument {
    /// Filename without extension; the final URL segment.
    pub slug: String,

    /// Filename including extension.
    pub filename: String,

    /// Owning top-level directory.
    pub category: String,

    /// First-level directory under the category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Type derived from the extension.
    #[serde(rename = "type")]
    pub document_type: DocumentType,

    pub title: String,
    pub status: SpecStatus,
    pub version: String,
    pub last_updated: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
}

impl SpecDocument {
    /// Assembles a document record from its location and extracted metadata.
    #[must_use]
    pub fn new(
        category: &str,
        subcategory: Option<&str>,
        filename: &str,
        document_type: DocumentType,
        metadata: SpecMetadata,
    ) -> Self {
        let slug = filename
            .rsplit_once('.')
            .map_or(filename, |(stem, _)| stem)
            .to_string();

        Self {
            slug,
            filename: filename.to_string(),
            category: category.to_string(),
            subcategory: subcategory.map(str::to_string),
            document_type,
            title: metadata.title,
            status: metadata.status,
            version: metadata.version,
            last_updated: metadata.last_updated,
            spec_id: metadata.spec_id,
        }
    }
}

/// Full content plus metadata for a single resolved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecContent {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub content: String,
    pub metadata: SpecMetadata,
}

// ============================================================================
// Navigation
// ============================================================================

/// A sidebar link to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub status: SpecStatus,
}

/// All links for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Capitalized category name.
    pub title: String,
    /// Raw category directory name.
    pub category: String,
    pub items: Vec<NavItem>,
}

/// Static-generation parameters for one document page.
///
/// `slug` is `[slug]` for category-root documents and
/// `[subcategory, slug]` for nested ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRoute {
    pub category: String,
    pub slug: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str) -> SpecMetadata {
        SpecMetadata {
            title: title.to_string(),
            status: SpecStatus::Draft,
            version: "1.0.0".to_string(),
            last_updated: String::new(),
            spec_id: None,
        }
    }

    #[test]
    fn test_document_type_from_extension() {
        assert_eq!(DocumentType::from_extension("md"), Some(DocumentType::Markdown));
        assert_eq!(DocumentType::from_extension("json"), Some(DocumentType::Json));
        assert_eq!(DocumentType::from_extension("jsonld"), Some(DocumentType::JsonLd));
        assert_eq!(DocumentType::from_extension("MD"), Some(DocumentType::Markdown));
        assert_eq!(DocumentType::from_extension("sol"), None);
        assert_eq!(DocumentType::from_extension("mdx"), None);
    }

    #[test]
    fn test_document_type_is_json() {
        assert!(DocumentType::Json.is_json());
        assert!(DocumentType::JsonLd.is_json());
        assert!(!DocumentType::Markdown.is_json());
    }

    #[test]
    fn test_document_type_from_path() {
        assert_eq!(
            DocumentType::from_path(Path::new("schemas/dpp-core.schema.json")),
            Some(DocumentType::Json)
        );
        assert_eq!(
            DocumentType::from_path(Path::new("context.jsonld")),
            Some(DocumentType::JsonLd)
        );
        assert_eq!(DocumentType::from_path(Path::new("README")), None);
        assert_eq!(DocumentType::from_path(Path::new("Token.sol")), None);
    }

    #[test]
    fn test_document_type_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentType::JsonLd).unwrap();
        assert_eq!(json, "\"jsonld\"");
        assert_eq!(DocumentType::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_status_normalize() {
        assert_eq!(SpecStatus::normalize("Active"), SpecStatus::Active);
        assert_eq!(SpecStatus::normalize("ACTIVE"), SpecStatus::Active);
        assert_eq!(SpecStatus::normalize("standard"), SpecStatus::Standard);
        assert_eq!(SpecStatus::normalize("Stable"), SpecStatus::Standard);
        assert_eq!(SpecStatus::normalize("Draft"), SpecStatus::Draft);
        assert_eq!(SpecStatus::normalize(""), SpecStatus::Draft);
        assert_eq!(SpecStatus::normalize("Proposed"), SpecStatus::Draft);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&SpecStatus::Standard).unwrap();
        assert_eq!(json, "\"Standard\"");
        assert_eq!(SpecStatus::default(), SpecStatus::Draft);
    }

    #[test]
    fn test_document_slug_strips_extension() {
        let doc = SpecDocument::new(
            "schemas",
            Some("dpp"),
            "dpp-core.schema.json",
            DocumentType::Json,
            metadata("DPP Core"),
        );
        assert_eq!(doc.slug, "dpp-core.schema");
        assert_eq!(doc.filename, "dpp-core.schema.json");
        assert_eq!(doc.subcategory.as_deref(), Some("dpp"));
    }

    #[test]
    fn test_document_slug_uppercase_extension() {
        let doc = SpecDocument::new(
            "identity",
            None,
            "DID-METHOD.MD",
            DocumentType::Markdown,
            metadata("DID Method"),
        );
        assert_eq!(doc.slug, "DID-METHOD");
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let doc = SpecDocument::new(
            "token",
            None,
            "transfer.md",
            DocumentType::Markdown,
            metadata("Transfer"),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "markdown");
        assert_eq!(value["lastUpdated"], "");
        assert!(value.get("subcategory").is_none());
        assert!(value.get("specId").is_none());
    }

    mod prop {
        use super::super::SpecStatus;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_ignores_ascii_case(s in "[a-zA-Z ]{0,16}") {
                prop_assert_eq!(
                    SpecStatus::normalize(&s),
                    SpecStatus::normalize(&s.to_ascii_uppercase())
                );
            }

            #[test]
            fn unknown_values_fall_back_to_draft(s in "[a-z]{0,12}") {
                prop_assume!(!matches!(s.as_str(), "active" | "standard" | "stable"));
                prop_assert_eq!(SpecStatus::normalize(&s), SpecStatus::Draft);
            }
        }
    }
}
