//! Unified service container for postrank
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{RankedSearch, SearchWeights, TrigramSearch};
use crate::core::similarity::SimilarityScorer;
use crate::core::types::{Document, Query, ScoredResult, SearchMode};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Weighted full-text ranking
    pub search: Arc<RankedSearch>,

    /// Title trigram ranking
    pub trigram: Arc<TrigramSearch>,

    /// Tag similarity lookup
    pub similarity: Arc<SimilarityScorer>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let search = Arc::new(RankedSearch::new(SearchWeights {
            title: config.search.title_weight,
            body: config.search.body_weight,
            threshold: config.search.rank_threshold,
        }));

        let trigram = Arc::new(TrigramSearch::new(config.search.trigram_threshold));

        let similarity = Arc::new(SimilarityScorer::new(
            config.similarity.default_limit,
            config.similarity.max_limit,
        ));

        Self {
            search,
            trigram,
            similarity,
            config: Arc::new(config),
        }
    }

    /// Normalize raw user input into a query using the configured length cap
    pub fn parse_query(&self, raw: &str) -> Query {
        Query::parse(raw, self.config.search.max_query_length)
    }

    /// Rank `corpus` for `raw_query` with the selected mode
    pub fn rank<'a>(
        &self,
        mode: SearchMode,
        raw_query: &str,
        corpus: &'a [Document],
    ) -> Result<Vec<ScoredResult<'a>>> {
        let query = self.parse_query(raw_query);
        match mode {
            SearchMode::FullText => self.search.rank(&query, corpus),
            SearchMode::Trigram => self.trigram.rank(&query, corpus),
        }
    }
}
