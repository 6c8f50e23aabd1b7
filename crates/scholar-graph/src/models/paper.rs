//! Paper record models.

use serde::{Deserialize, Serialize};

/// A normalized paper record.
///
/// Immutable once built; the identifier is the only deduplication key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    /// Version-less arXiv identifier.
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Author names in listed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Paper abstract (may be empty).
    #[serde(default)]
    pub r#abstract: String,

    /// Abstract page URL.
    pub link: String,

    /// Subject categories; the first is the primary category.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl PaperRecord {
    /// The category used to scope related-paper queries.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Get the title, falling back to "Untitled" when empty.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }
}

/// Lightweight projection of a paper returned by category queries.
///
/// Only lives for the duration of one expansion step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedSummary {
    /// Version-less arXiv identifier.
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Author names.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Subject categories.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<&PaperRecord> for RelatedSummary {
    fn from(record: &PaperRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            authors: record.authors.clone(),
            categories: record.categories.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_category() {
        let record = PaperRecord {
            id: "2101.00001".into(),
            categories: vec!["cs.AI".into(), "cs.LG".into()],
            ..Default::default()
        };
        assert_eq!(record.primary_category(), Some("cs.AI"));
        assert_eq!(PaperRecord::default().primary_category(), None);
    }

    #[test]
    fn test_abstract_serializes_without_raw_prefix() {
        let record = PaperRecord {
            id: "2101.00001".into(),
            r#abstract: "We study graphs.".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["abstract"], "We study graphs.");
        assert_eq!(json["id"], "2101.00001");
    }
}
