//! Fuzzy title matching by trigram similarity.
//!
//! Similarity between two strings is the Jaccard index of their
//! trigram sets. It tolerates typos and partial words that full-text
//! ranking would miss ("djngo" still finds "Django").

use crate::core::error::Result;
use crate::core::search::sort_scored;
use crate::core::search::tokenizer::trigrams;
use crate::core::types::{Document, Query, ScoredResult};
use std::collections::HashSet;

/// Default similarity a title must exceed to be returned
pub const DEFAULT_TRIGRAM_THRESHOLD: f32 = 0.1;

/// Trigram similarity of two strings, in [0, 1]
pub fn similarity(a: &str, b: &str) -> f32 {
    set_similarity(&trigrams(a), &trigrams(b))
}

fn set_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    shared as f32 / union as f32
}

/// Ranks documents by title trigram similarity
#[derive(Debug, Clone)]
pub struct TrigramSearch {
    threshold: f32,
}

impl Default for TrigramSearch {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGRAM_THRESHOLD)
    }
}

impl TrigramSearch {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Rank `corpus` titles against `query`
    ///
    /// Keeps documents whose similarity is strictly greater than the
    /// threshold, ordered by similarity descending, then by id.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument`: a corpus document has a blank title or body
    pub fn rank<'a, I>(&self, query: &Query, corpus: I) -> Result<Vec<ScoredResult<'a>>>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let query_grams = trigrams(query.as_str());
        if query_grams.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for document in corpus {
            document.validate()?;

            let score = set_similarity(&query_grams, &trigrams(&document.title));
            if score > self.threshold {
                results.push(ScoredResult { document, score });
            }
        }

        sort_scored(&mut results);

        tracing::debug!(
            query = query.as_str(),
            matched = results.len(),
            "trigram ranking complete"
        );

        Ok(results)
    }
}
