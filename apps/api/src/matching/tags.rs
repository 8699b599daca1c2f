//! Tag Extractor — turns free text into a short, frequency-ranked keyword list.
//!
//! Tokens are ASCII word-bounded runs of at least four lowercase letters, so short
//! words ("the", "and", "of") never become tags. There is no stop-list.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on the number of tags kept for any lesson or module.
pub const MAX_TAGS: usize = 5;

/// Minimum token length for a word to qualify as a tag.
pub const MIN_TAG_LEN: usize = 4;

// ASCII word boundaries: a run glued to a digit or underscore is not a tag.
static TAG_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?-u:\b)[a-z]{{{MIN_TAG_LEN},}}(?-u:\b)"))
        .expect("tag token regex is valid")
});

/// Extracts up to `MAX_TAGS` tags from `text`.
///
/// Tags are ordered by descending frequency. Tokens with equal frequency keep
/// the order in which they first appeared in the text.
pub fn extract_tags(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();

    // Insertion order == first occurrence order
    let mut frequencies: IndexMap<&str, usize> = IndexMap::new();
    for token in TAG_TOKEN.find_iter(&lowered) {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = frequencies.into_iter().collect();
    // sort_by is stable: ties stay in first-occurrence order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_TAGS)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Same as [`extract_tags`] for callers holding an optional field.
pub fn extract_tags_opt(text: Option<&str>) -> Vec<String> {
    text.map(extract_tags).unwrap_or_default()
}
