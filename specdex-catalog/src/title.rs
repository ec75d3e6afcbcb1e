//! Filename-to-title humanization.
//!
//! Titles derived from filenames get a word-capitalization pass followed by
//! a closed table of acronym corrections. Anything not in the table stays
//! title-cased.

use specdex_core::SUPPORTED_EXTENSIONS;

/// Acronym corrections, applied in order as substring replacements after
/// capitalization, so `Didcomm` becomes `DIDcomm`.
const ACRONYMS: &[(&str, &str)] = &[
    ("Dpp", "DPP"),
    ("Gs1", "GS1"),
    ("Vc", "VC"),
    ("Did", "DID"),
    ("Kyc", "KYC"),
    ("Aml", "AML"),
    ("Rbac", "RBAC"),
    ("Espr", "ESPR"),
    ("Gdpr", "GDPR"),
    ("Mica", "MiCA"),
    ("Cbv", "CBV"),
];

/// Format a filename as a human-readable title.
///
/// `dpp-core.schema.json` becomes `DPP Core Schema`: the supported
/// extension is dropped, `-`, `_` and `.` separate words, every word gets
/// an upper-case first letter, and known acronyms are corrected.
#[must_use]
pub fn humanize_filename(filename: &str) -> String {
    let stem = strip_supported_extension(filename);
    let spaced: String = stem
        .chars()
        .map(|c| if matches!(c, '-' | '_' | '.') { ' ' } else { c })
        .collect();

    let title = capitalize_words(&spaced)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    correct_acronyms(title)
}

/// Capitalize a category directory name for display.
///
/// Only the first character changes: `identity` → `Identity`.
#[must_use]
pub fn capitalize_category(category: &str) -> String {
    let mut chars = category.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn strip_supported_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext))
            if SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext)) =>
        {
            stem
        }
        _ => filename,
    }
}

/// Upper-case the first character of every run of word characters.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}

fn correct_acronyms(title: String) -> String {
    ACRONYMS.iter().fold(title, |acc, (from, to)| {
        if acc.contains(from) {
            acc.replace(from, to)
        } else {
            acc
        }
    })
}
