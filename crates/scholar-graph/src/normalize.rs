//! Shared normalization helpers for identifiers, text and author names.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+$").expect("valid version regex"));

/// Normalize an arXiv identifier to its version-less form.
///
/// Accepts bare identifiers (`2101.00001v2`), abstract URLs
/// (`http://arxiv.org/abs/2101.00001v2`) and old-style identifiers
/// (`hep-th/9901001v1`).
#[must_use]
pub fn paper_id(raw: &str) -> String {
    let trimmed = raw.trim();
    let bare = trimmed.split_once("/abs/").map_or(trimmed, |(_, rest)| rest);
    let bare = bare.trim_end_matches('/');
    VERSION_SUFFIX.replace(bare, "").into_owned()
}

/// Collapse runs of whitespace (including line breaks) into single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key used to compare author names across papers.
#[must_use]
pub fn author_key(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}
