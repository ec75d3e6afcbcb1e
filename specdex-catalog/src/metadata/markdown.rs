//! Bold-marker metadata for markdown specifications.
//!
//! Markers are lines such as `**Status:** Active` or
//! `**Last Updated:** 2025-01-15`. Only the first [`MARKER_WINDOW_LINES`]
//! lines are searched; a marker further down is not metadata. The title
//! is the first level-1 heading anywhere in the document.

use super::DEFAULT_VERSION;
use regex::Regex;
use specdex_core::{SpecMetadata, SpecStatus};
use std::sync::LazyLock;

/// Number of leading lines searched for markers.
pub const MARKER_WINDOW_LINES: usize = 20;

/// Title used when a document has no `# ` heading.
pub const UNTITLED: &str = "Untitled Specification";

/// Marker keys tried, in order, for the specification identifier.
pub const SPEC_ID_KEYS: [&str; 4] = [
    "Specification Series",
    "Specification ID",
    "Specification",
    "Requirement",
];

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("valid regex"));

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| marker_regex("Status"));
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| marker_regex("Version"));
static LAST_UPDATED_RE: LazyLock<Regex> = LazyLock::new(|| marker_regex("Last Updated"));
static SPEC_ID_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| SPEC_ID_KEYS.iter().map(|key| marker_regex(key)).collect());

fn marker_regex(key: &str) -> Regex {
    Regex::new(&format!(r"(?i)\*\*{}:\*\*\s*(.+)", regex::escape(key))).expect("valid regex")
}

/// Parse markdown content into metadata. Never fails.
#[must_use]
pub fn parse(content: &str) -> SpecMetadata {
    let window: Vec<&str> = content.split('\n').take(MARKER_WINDOW_LINES).collect();

    let status = find_marker(&window, &STATUS_RE)
        .map_or(SpecStatus::Draft, |value| SpecStatus::normalize(&value));
    let version = find_marker(&window, &VERSION_RE).unwrap_or_else(|| DEFAULT_VERSION.to_string());
    let last_updated = find_marker(&window, &LAST_UPDATED_RE).unwrap_or_default();
    let spec_id = SPEC_ID_RES.iter().find_map(|re| find_marker(&window, re));

    SpecMetadata {
        title: extract_title(content).unwrap_or_else(|| UNTITLED.to_string()),
        status,
        version,
        last_updated,
        spec_id,
    }
}

/// Text of the first `# Heading` line in the whole document.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
    TITLE_RE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Value of the `**<key>:**` marker within the first [`MARKER_WINDOW_LINES`]
/// lines. Key matching is case-insensitive; empty values count as absent.
#[must_use]
pub fn extract_marker(content: &str, key: &str) -> Option<String> {
    let window: Vec<&str> = content.split('\n').take(MARKER_WINDOW_LINES).collect();
    find_marker(&window, &marker_regex(key))
}

fn find_marker(lines: &[&str], re: &Regex) -> Option<String> {
    lines.iter().find_map(|line| {
        re.captures(line)
            .map(|caps| caps[1].trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HEADER: &str = "\
# DID Method Specification

**Status:** Active
**Version:** 2.1.0
**Last Updated:** 2025-01-15
**Specification Series:** GSPEC-ID-001

## Abstract

Body text.
";

    fn padded(lines_before: usize, marker: &str) -> String {
        let mut doc = String::from("# Padded\n");
        for i in 1..lines_before {
            doc.push_str(&format!("line {i}\n"));
        }
        doc.push_str(marker);
        doc.push('\n');
        doc
    }

    #[test]
    fn test_full_header() {
        let meta = parse(FULL_HEADER);
        assert_eq!(meta.title, "DID Method Specification");
        assert_eq!(meta.status, SpecStatus::Active);
        assert_eq!(meta.version, "2.1.0");
        assert_eq!(meta.last_updated, "2025-01-15");
        assert_eq!(meta.spec_id.as_deref(), Some("GSPEC-ID-001"));
    }

    #[test]
    fn test_defaults_without_markers() {
        let meta = parse("# Identity\n\nJust prose.\n");
        assert_eq!(meta.title, "Identity");
        assert_eq!(meta.status, SpecStatus::Draft);
        assert_eq!(meta.version, "1.0.0");
        assert_eq!(meta.last_updated, "");
        assert!(meta.spec_id.is_none());
    }

    #[test]
    fn test_untitled_when_no_heading() {
        let meta = parse("No heading here\n## Only a subheading\n");
        assert_eq!(meta.title, UNTITLED);
    }

    #[test]
    fn test_title_found_beyond_marker_window() {
        let mut doc = String::new();
        for i in 0..40 {
            doc.push_str(&format!("preamble {i}\n"));
        }
        doc.push_str("# Late Title\n");
        assert_eq!(parse(&doc).title, "Late Title");
    }

    #[test]
    fn test_status_marker_on_line_20_is_found() {
        let doc = padded(19, "**Status:** Active");
        assert_eq!(doc.split('\n').nth(19), Some("**Status:** Active"));
        assert_eq!(parse(&doc).status, SpecStatus::Active);
    }

    #[test]
    fn test_status_marker_after_line_20_is_ignored() {
        let doc = padded(20, "**Status:** Active");
        assert_eq!(doc.split('\n').nth(20), Some("**Status:** Active"));
        assert_eq!(parse(&doc).status, SpecStatus::Draft);
    }

    #[test]
    fn test_marker_key_case_insensitive() {
        let meta = parse("# T\n**status:** active\n**VERSION:** 3.0.0\n");
        assert_eq!(meta.status, SpecStatus::Active);
        assert_eq!(meta.version, "3.0.0");
    }

    #[test]
    fn test_stable_maps_to_standard() {
        assert_eq!(parse("**Status:** Stable").status, SpecStatus::Standard);
    }

    #[test]
    fn test_unrecognized_status_is_indistinguishable_from_missing() {
        let declared = parse("# A\n**Status:** Proposed\n");
        let missing = parse("# A\n");
        assert_eq!(declared.status, SpecStatus::Draft);
        assert_eq!(declared.status, missing.status);
    }

    #[test]
    fn test_marker_inside_list_item() {
        let meta = parse("# T\n- **Version:** 0.9.0\n");
        assert_eq!(meta.version, "0.9.0");
    }

    #[test]
    fn test_empty_marker_value_uses_default() {
        let meta = parse("# T\n**Version:**   \n");
        assert_eq!(meta.version, "1.0.0");
    }

    #[test]
    fn test_spec_id_priority() {
        let doc = "# T\n**Requirement:** REQ-9\n**Specification ID:** GSPEC-7\n";
        assert_eq!(parse(doc).spec_id.as_deref(), Some("GSPEC-7"));

        let doc = "# T\n**Specification:** GSPEC-CORE\n**Requirement:** REQ-9\n";
        assert_eq!(parse(doc).spec_id.as_deref(), Some("GSPEC-CORE"));

        let doc = "# T\n**Requirement:** REQ-9\n";
        assert_eq!(parse(doc).spec_id.as_deref(), Some("REQ-9"));
    }

    #[test]
    fn test_specification_key_does_not_match_longer_keys() {
        let doc = "# T\n**Specification ID:** GSPEC-7\n";
        assert_eq!(extract_marker(doc, "Specification"), None);
        assert_eq!(extract_marker(doc, "Specification ID").as_deref(), Some("GSPEC-7"));
    }

    #[test]
    fn test_crlf_values_trimmed() {
        let meta = parse("# Windows Title\r\n**Status:** Active\r\n**Version:** 1.2.3\r\n");
        assert_eq!(meta.title, "Windows Title");
        assert_eq!(meta.status, SpecStatus::Active);
        assert_eq!(meta.version, "1.2.3");
    }

    #[test]
    fn test_level_two_heading_is_not_title() {
        let meta = parse("## Section\n# Real Title\n");
        assert_eq!(meta.title, "Real Title");
    }
}
