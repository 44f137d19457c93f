//! Tag-based similar post lookup.
//!
//! Candidates are ranked by how many tags they share with the target
//! post; equally similar posts are ordered newest first.

use crate::core::error::Result;
use crate::core::types::{Document, SimilarityResult};
use std::cmp::Reverse;

/// Default number of similar posts returned
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Finds posts sharing tags with a target post
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    default_limit: usize,
    max_limit: usize,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILAR_LIMIT, 50)
    }
}

impl SimilarityScorer {
    /// Create a new scorer
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank `candidates` by tags shared with `target`
    ///
    /// The target itself (matched by id) and candidates sharing no tag
    /// are skipped. Results are ordered by shared tag count descending,
    /// then publish date descending, then id, and truncated to `limit`
    /// (default limit when `None`, never more than the max limit).
    ///
    /// # Errors
    ///
    /// - `InvalidDocument`: target or a candidate has a blank title or body
    pub fn similar<'a, I>(
        &self,
        target: &Document,
        candidates: I,
        limit: Option<usize>,
    ) -> Result<Vec<SimilarityResult<'a>>>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        target.validate()?;

        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit);
        if limit == 0 || target.tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for document in candidates {
            document.validate()?;
            if document.id == target.id {
                continue;
            }

            let shared_tags = target.shared_tag_count(document);
            if shared_tags > 0 {
                results.push(SimilarityResult {
                    document,
                    shared_tags,
                });
            }
        }

        results.sort_by_key(|r| {
            (
                Reverse(r.shared_tags),
                Reverse(r.document.publish),
                r.document.id,
            )
        });
        results.truncate(limit);

        tracing::debug!(
            post = target.id,
            limit,
            returned = results.len(),
            "similar posts computed"
        );

        Ok(results)
    }
}
