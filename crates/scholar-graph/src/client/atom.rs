//! Conversion of arXiv Atom entries into paper models.

use feed_rs::model::Entry;

use crate::models::{PaperRecord, RelatedSummary};
use crate::normalize;

/// arXiv reports query errors as a single entry whose id points at its error docs.
pub(crate) fn is_error_entry(entry: &Entry) -> bool {
    entry.id.contains("/api/errors")
}

/// Entries for unknown identifiers come back without a title.
pub(crate) fn is_empty_entry(entry: &Entry) -> bool {
    entry.title.as_ref().is_none_or(|t| t.content.trim().is_empty())
}

/// Summary text of an error entry, for diagnostics.
pub(crate) fn error_message(entry: &Entry) -> String {
    entry
        .summary
        .as_ref()
        .map(|s| normalize::collapse_whitespace(&s.content))
        .unwrap_or_else(|| entry.id.clone())
}

pub(crate) fn to_record(entry: &Entry) -> PaperRecord {
    PaperRecord {
        id: normalize::paper_id(&entry.id),
        title: title(entry),
        authors: authors(entry),
        r#abstract: entry
            .summary
            .as_ref()
            .map(|s| normalize::collapse_whitespace(&s.content))
            .unwrap_or_default(),
        link: link(entry),
        categories: categories(entry),
    }
}

pub(crate) fn to_summary(entry: &Entry) -> RelatedSummary {
    RelatedSummary {
        id: normalize::paper_id(&entry.id),
        title: title(entry),
        authors: authors(entry),
        categories: categories(entry),
    }
}

fn title(entry: &Entry) -> String {
    entry.title.as_ref().map(|t| normalize::collapse_whitespace(&t.content)).unwrap_or_default()
}

fn authors(entry: &Entry) -> Vec<String> {
    entry
        .authors
        .iter()
        .map(|person| normalize::collapse_whitespace(&person.name))
        .filter(|name| !name.is_empty())
        .collect()
}

fn categories(entry: &Entry) -> Vec<String> {
    entry.categories.iter().map(|c| c.term.trim().to_string()).filter(|t| !t.is_empty()).collect()
}

fn link(entry: &Entry) -> String {
    entry
        .links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
        .map(|l| l.href.clone())
        .unwrap_or_else(|| entry.id.clone())
}
