//! YAML frontmatter splitting and lenient field access.

use serde_yaml::{Mapping, Value};

const FENCE: &str = "---";

/// A document split into its frontmatter block and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    /// Raw YAML between the fences, if the document has any.
    pub yaml: Option<&'a str>,
    /// Everything after the closing fence line.
    pub body: &'a str,
}

/// Split a leading `---` fenced block from the body.
///
/// The opening fence must be the first line. A document with an opening
/// fence but no closing fence has no frontmatter.
#[must_use]
pub fn split(source: &str) -> Split<'_> {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);
    let no_frontmatter = Split {
        yaml: None,
        body: text,
    };

    let Some((first, rest)) = text.split_once('\n') else {
        return no_frontmatter;
    };
    if first.trim_end() != FENCE {
        return no_frontmatter;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Split {
                yaml: Some(&rest[..offset]),
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }
    no_frontmatter
}

/// Parse a frontmatter block into a mapping.
///
/// An empty block or a bare `null` yields an empty mapping.
///
/// # Errors
///
/// Returns the YAML error when the block does not parse, or a message when
/// it parses to something other than a mapping.
pub fn parse(yaml: &str) -> Result<Mapping, String> {
    match serde_yaml::from_str::<Value>(yaml).map_err(|e| e.to_string())? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(format!("expected a mapping, found {}", kind(&other))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A scalar field rendered as text. Empty strings count as absent.
pub fn text(map: &Mapping, key: &str) -> Option<String> {
    let rendered = match map.get(key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!rendered.is_empty()).then_some(rendered)
}

/// A list of scalar strings. A single scalar becomes a one-element list.
pub fn list(map: &Mapping, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Whether a field is explicitly `false`.
pub fn is_false(map: &Mapping, key: &str) -> bool {
    matches!(map.get(key), Some(Value::Bool(false)))
}
