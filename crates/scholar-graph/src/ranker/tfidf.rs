//! TF-IDF term weighting over a small in-memory corpus of abstracts.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]+\b").expect("valid token regex"));

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .map(|word| word.to_string())
        .collect()
});

/// Split text into lowercase word tokens, dropping English stop words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|token| !STOP_WORDS.contains(token))
        .collect()
}

/// Per-document term weights fitted on one corpus.
#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    weights: Vec<HashMap<String, f64>>,
}

impl TfIdfModel {
    /// Fit the model. Document order is preserved: index `i` in the input is
    /// document `i` in the model.
    ///
    /// Uses `tf = 1 + ln(count)` and smoothed `idf = ln((1 + n) / (1 + df)) + 1`.
    #[must_use]
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for token in tokenize(doc.as_ref()) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let weights = counts
            .iter()
            .map(|doc| {
                doc.iter()
                    .map(|(term, &count)| {
                        let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                        let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                        let tf = 1.0 + (count as f64).ln();
                        (term.clone(), tf * idf)
                    })
                    .collect()
            })
            .collect();

        Self { weights }
    }

    /// Number of documents in the model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the model has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of `term` in document `doc`, or 0.
    #[must_use]
    pub fn weight(&self, doc: usize, term: &str) -> f64 {
        self.weights.get(doc).and_then(|w| w.get(term)).copied().unwrap_or(0.0)
    }

    /// The `k` highest-weighted terms of a document, ties broken alphabetically.
    #[must_use]
    pub fn top_terms(&self, doc: usize, k: usize) -> HashSet<String> {
        let Some(weights) = self.weights.get(doc) else {
            return HashSet::new();
        };

        let mut ranked: Vec<(&String, f64)> = weights.iter().map(|(t, &w)| (t, w)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.into_iter().take(k).map(|(term, _)| term.clone()).collect()
    }
}

/// Overlap of two term sets: `|a ∩ b| / sqrt(|a| * |b|)`.
///
/// Symmetric and within [0, 1]; 0 when either set is empty.
#[must_use]
pub fn term_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count() as f64;
    shared / ((a.len() as f64) * (b.len() as f64)).sqrt()
}
