//! Metadata for JSON Schema and JSON-LD specifications.
//!
//! Schemas are treated as inherently stable, so a parsed document is always
//! `Standard`. The version comes from a `/vX.Y.Z/` segment of `$id`.

use super::{DEFAULT_VERSION, Extraction, default_metadata};
use crate::title::humanize_filename;
use regex::Regex;
use serde_json::Value;
use specdex_core::{SpecMetadata, SpecStatus};
use std::sync::LazyLock;

static ID_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/v(\d+\.\d+\.\d+)/").expect("valid regex"));

/// Parse JSON content into metadata.
///
/// Returns [`Extraction::Fallback`] with [`default_metadata`] when the
/// content is not valid JSON, is a bare `null` that cannot carry fields, or
/// has a `$id` that is not a string.
#[must_use]
pub fn parse(content: &str, filename: &str) -> Extraction {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Null) | Err(_) => Extraction::Fallback(default_metadata(filename)),
        Ok(value) if has_malformed_id(&value) => {
            Extraction::Fallback(default_metadata(filename))
        }
        Ok(value) => Extraction::Parsed(from_value(&value, filename)),
    }
}

fn has_malformed_id(value: &Value) -> bool {
    value
        .get("$id")
        .is_some_and(|id| !id.is_string() && !id.is_null())
}

fn from_value(value: &Value, filename: &str) -> SpecMetadata {
    let title = string_field(value, "title")
        .or_else(|| string_field(value, "name"))
        .map_or_else(|| humanize_filename(filename), str::to_string);

    let id = value.get("$id").and_then(Value::as_str);
    let version = id
        .and_then(version_from_id)
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    SpecMetadata {
        title,
        status: SpecStatus::Standard,
        version,
        last_updated: String::new(),
        spec_id: id.map(str::to_string),
    }
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extract `X.Y.Z` from an identifier containing `/vX.Y.Z/`.
#[must_use]
pub fn version_from_id(id: &str) -> Option<String> {
    ID_VERSION_RE.captures(id).map(|caps| caps[1].to_string())
}
