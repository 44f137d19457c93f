//! Search module for post relevance ranking.
//!
//! This module provides two ranking functions over caller-supplied
//! documents: weighted full-text relevance and title trigram
//! similarity.

mod ranked;
pub mod tokenizer;
mod trigram;

pub use ranked::{RankedSearch, SearchWeights};
pub use trigram::{similarity as trigram_similarity, TrigramSearch, DEFAULT_TRIGRAM_THRESHOLD};

use crate::core::types::ScoredResult;
use std::cmp::Ordering;

/// Order by score descending, then document id ascending
pub(crate) fn sort_scored(results: &mut [ScoredResult<'_>]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.document.id.cmp(&b.document.id))
    });
}
