//! Collaborator ranking by abstract similarity.
//!
//! Document 0 of the TF-IDF corpus is the seed abstract; documents 1..=N are
//! the candidates in input order. Each candidate's score is credited to every
//! author on it who is not an author of the seed.

mod tfidf;

use std::collections::{HashMap, HashSet};

pub use tfidf::{TfIdfModel, term_overlap, tokenize};

use crate::config::RankingConfig;
use crate::models::{CollaboratorCandidate, PaperRecord};
use crate::normalize;

/// Justification attached to every suggestion.
pub const JUSTIFICATION: &str =
    "Co-authored papers whose abstracts share key terms with this paper's abstract.";

/// Scores candidate papers against a seed and turns scores into suggestions.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker {
    top_terms: usize,
    max_suggestions: usize,
}

impl SimilarityRanker {
    /// Create a ranker.
    #[must_use]
    pub const fn new(config: RankingConfig) -> Self {
        Self { top_terms: config.top_terms, max_suggestions: config.max_suggestions }
    }

    /// Similarity of each candidate's abstract to the seed abstract, in input order.
    #[must_use]
    pub fn score_candidates(&self, seed: &PaperRecord, candidates: &[PaperRecord]) -> Vec<f64> {
        let documents: Vec<&str> = std::iter::once(seed.r#abstract.as_str())
            .chain(candidates.iter().map(|c| c.r#abstract.as_str()))
            .collect();

        let model = TfIdfModel::fit(&documents);
        let seed_terms = model.top_terms(0, self.top_terms);

        (1..=candidates.len())
            .map(|i| term_overlap(&seed_terms, &model.top_terms(i, self.top_terms)))
            .collect()
    }

    /// Rank authors of `candidates` as collaborators for `seed`.
    ///
    /// Authors whose accumulated score is zero are dropped, so fewer than
    /// `max_suggestions` entries may come back. Equal totals keep the order
    /// in which their authors were first seen.
    #[must_use]
    pub fn rank(&self, seed: &PaperRecord, candidates: &[PaperRecord]) -> Vec<CollaboratorCandidate> {
        let scores = self.score_candidates(seed, candidates);
        let scored = candidates.iter().map(|c| c.authors.as_slice()).zip(scores);

        let mut totals = accumulate_author_scores(&seed.authors, scored);
        totals.retain(|(_, score)| *score > 0.0);
        // Stable sort: equal totals keep first-seen order.
        totals.sort_by(|a, b| b.1.total_cmp(&a.1));
        totals.truncate(self.max_suggestions);

        tracing::debug!(
            seed = %seed.id,
            candidates = candidates.len(),
            suggestions = totals.len(),
            "Ranked collaborators"
        );

        totals
            .into_iter()
            .map(|(name, score)| CollaboratorCandidate {
                name,
                score,
                justification: JUSTIFICATION.to_string(),
            })
            .collect()
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

/// Sum per-candidate scores by author, skipping the seed's own authors.
///
/// Names are merged on a whitespace- and case-insensitive key; the first
/// spelling seen is kept. Output is in first-seen order.
pub fn accumulate_author_scores<'a, I>(seed_authors: &[String], scored: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a [String], f64)>,
{
    let excluded: HashSet<String> = seed_authors.iter().map(|a| normalize::author_key(a)).collect();

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, f64)> = Vec::new();

    for (authors, score) in scored {
        // An author listed twice on one paper is credited once.
        let mut credited: HashSet<String> = HashSet::new();

        for author in authors {
            let key = normalize::author_key(author);
            if key.is_empty() || excluded.contains(&key) || !credited.insert(key.clone()) {
                continue;
            }

            match index.get(&key) {
                Some(&slot) => totals[slot].1 += score,
                None => {
                    index.insert(key, totals.len());
                    totals.push((normalize::collapse_whitespace(author), score));
                }
            }
        }
    }

    totals
}
