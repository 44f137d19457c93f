//! Weighted full-text ranking.
//!
//! Each distinct query term is scored against a document's title and
//! body. An occurrence in a field with weight `w` leaves a residual of
//! `1 - w`; the term's relevance is one minus the product of residuals
//! over all its occurrences. The document score is the mean term
//! relevance, so scores stay in [0, 1] regardless of document length.

use crate::core::error::Result;
use crate::core::search::tokenizer::{query_terms, tokenize};
use crate::core::search::sort_scored;
use crate::core::types::{Document, Query, ScoredResult};
use std::collections::HashMap;

/// Field weights and cutoff for [`RankedSearch`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWeights {
    /// Weight of a title occurrence, in (0, 1]
    pub title: f32,
    /// Weight of a body occurrence, in (0, 1]
    pub body: f32,
    /// Minimum score kept in results (inclusive)
    pub threshold: f32,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            title: 1.0,
            body: 0.4,
            threshold: 0.3,
        }
    }
}

/// Relevance ranking over title and body
#[derive(Debug, Clone, Default)]
pub struct RankedSearch {
    weights: SearchWeights,
}

impl RankedSearch {
    pub fn new(weights: SearchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> SearchWeights {
        self.weights
    }

    /// Rank `corpus` against `query`
    ///
    /// Documents scoring below the threshold, or matching no query term
    /// at all, are dropped. Results are
    /// ordered by score descending, then by id. The corpus is consumed
    /// at most once, and not at all when the query has no usable terms.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument`: a corpus document has a blank title or body
    pub fn rank<'a, I>(&self, query: &Query, corpus: I) -> Result<Vec<ScoredResult<'a>>>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let terms = query_terms(query.as_str());
        if terms.is_empty() {
            tracing::debug!(query = query.as_str(), "query has only stop words");
            return Ok(Vec::new());
        }

        let mut scanned = 0usize;
        let mut results = Vec::new();
        for document in corpus {
            document.validate()?;
            scanned += 1;

            // A zero threshold must still not admit documents sharing no term
            let score = self.score(&terms, document);
            if score > 0.0 && score >= self.weights.threshold {
                results.push(ScoredResult { document, score });
            }
        }

        sort_scored(&mut results);

        tracing::debug!(
            query = query.as_str(),
            terms = terms.len(),
            scanned,
            matched = results.len(),
            "full-text ranking complete"
        );

        Ok(results)
    }

    /// Score a single document against pre-tokenized query terms
    pub fn score(&self, terms: &[String], document: &Document) -> f32 {
        if terms.is_empty() {
            return 0.0;
        }

        let title_tf = term_frequencies(&document.title);
        let body_tf = term_frequencies(&document.body);

        let title_residual = 1.0 - self.weights.title;
        let body_residual = 1.0 - self.weights.body;

        let total: f32 = terms
            .iter()
            .map(|term| {
                let in_title = title_tf.get(term.as_str()).copied().unwrap_or(0);
                let in_body = body_tf.get(term.as_str()).copied().unwrap_or(0);
                if in_title == 0 && in_body == 0 {
                    return 0.0;
                }
                1.0 - title_residual.powi(in_title) * body_residual.powi(in_body)
            })
            .sum();

        (total / terms.len() as f32).clamp(0.0, 1.0)
    }
}

fn term_frequencies(text: &str) -> HashMap<String, i32> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
