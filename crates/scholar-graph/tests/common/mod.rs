//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use scholar_graph::error::{ClientError, ClientResult};
use scholar_graph::fetch::{PaperFetcher, RelatedFetcher};
use scholar_graph::models::{PaperRecord, RelatedSummary};

// =============================================================================
// In-memory arXiv stand-in
// =============================================================================

/// Scripted source implementing both fetcher traits.
///
/// Related sets are keyed by category; giving each paper its own category
/// makes the crawl tree fully controllable.
#[derive(Default)]
pub struct FakeArxiv {
    papers: HashMap<String, PaperRecord>,
    related: HashMap<String, Vec<String>>,
    failing_papers: HashSet<String>,
    failing_categories: HashSet<String>,
    pub paper_calls: Mutex<Vec<String>>,
    pub related_calls: Mutex<Vec<(String, String, usize)>>,
}

impl FakeArxiv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paper(mut self, id: &str, category: &str, authors: &[&str], abstract_text: &str) -> Self {
        let categories = if category.is_empty() { Vec::new() } else { vec![category.to_string()] };
        self.papers.insert(
            id.to_string(),
            PaperRecord {
                id: id.to_string(),
                title: format!("Paper {id}"),
                authors: authors.iter().map(|a| a.to_string()).collect(),
                r#abstract: abstract_text.to_string(),
                link: format!("http://arxiv.org/abs/{id}v1"),
                categories,
            },
        );
        self
    }

    pub fn with_related(mut self, category: &str, ids: &[&str]) -> Self {
        self.related.insert(category.to_string(), ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn failing_paper(mut self, id: &str) -> Self {
        self.failing_papers.insert(id.to_string());
        self
    }

    pub fn failing_category(mut self, category: &str) -> Self {
        self.failing_categories.insert(category.to_string());
        self
    }

    pub fn paper_calls(&self) -> Vec<String> {
        self.paper_calls.lock().unwrap().clone()
    }

    pub fn related_calls(&self) -> Vec<(String, String, usize)> {
        self.related_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaperFetcher for FakeArxiv {
    async fn fetch(&self, id: &str) -> ClientResult<PaperRecord> {
        self.paper_calls.lock().unwrap().push(id.to_string());
        if self.failing_papers.contains(id) {
            return Err(ClientError::server(503, "upstream unavailable"));
        }
        self.papers.get(id).cloned().ok_or_else(|| ClientError::not_found(id))
    }
}

#[async_trait]
impl RelatedFetcher for FakeArxiv {
    async fn fetch_related(
        &self,
        category: &str,
        exclude_id: &str,
        max_results: usize,
    ) -> ClientResult<Vec<RelatedSummary>> {
        self.related_calls.lock().unwrap().push((
            category.to_string(),
            exclude_id.to_string(),
            max_results,
        ));
        if self.failing_categories.contains(category) {
            return Err(ClientError::server(500, "search failed"));
        }

        Ok(self
            .related
            .get(category)
            .into_iter()
            .flatten()
            .filter(|id| id.as_str() != exclude_id)
            .take(max_results)
            .map(|id| match self.papers.get(id) {
                Some(record) => RelatedSummary::from(record),
                None => RelatedSummary { id: id.clone(), ..Default::default() },
            })
            .collect())
    }
}

// =============================================================================
// Atom fixtures for wiremock
// =============================================================================

/// One arXiv Atom entry.
pub fn entry_xml(id: &str, title: &str, authors: &[&str], summary: &str, categories: &[&str]) -> String {
    let authors: String =
        authors.iter().map(|a| format!("    <author><name>{a}</name></author>\n")).collect();
    let categories: String = categories
        .iter()
        .map(|c| format!("    <category term=\"{c}\" scheme=\"http://arxiv.org/schemas/atom\"/>\n"))
        .collect();

    format!(
        "  <entry>\n\
         \x20   <id>http://arxiv.org/abs/{id}v1</id>\n\
         \x20   <updated>2021-01-02T00:00:00Z</updated>\n\
         \x20   <published>2021-01-01T00:00:00Z</published>\n\
         \x20   <title>{title}</title>\n\
         \x20   <summary>{summary}</summary>\n\
         {authors}\
         \x20   <link href=\"http://arxiv.org/abs/{id}v1\" rel=\"alternate\" type=\"text/html\"/>\n\
         {categories}\
         \x20 </entry>\n"
    )
}

/// An Atom feed wrapping the given entries.
pub fn feed_xml(entries: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <feed xmlns=\"http://www.w3.org/2005/Atom\">\n\
         \x20 <id>http://arxiv.org/api/query</id>\n\
         \x20 <title type=\"html\">ArXiv Query</title>\n\
         \x20 <updated>2024-01-01T00:00:00-05:00</updated>\n\
         {}\
         </feed>\n",
        entries.concat()
    )
}

/// The error feed arXiv returns for malformed identifiers.
pub fn error_feed_xml(message: &str) -> String {
    feed_xml(&[format!(
        "  <entry>\n\
         \x20   <id>http://arxiv.org/api/errors#incorrect_id_format</id>\n\
         \x20   <title>Error</title>\n\
         \x20   <summary>{message}</summary>\n\
         \x20   <updated>2024-01-01T00:00:00-05:00</updated>\n\
         \x20 </entry>\n"
    )])
}
