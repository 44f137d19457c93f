//! postrank - relevance ranking and similar posts for a blog
//!
//! The ranking core behind a blog's search box and "similar posts"
//! sidebar. It works on documents the caller has already fetched and
//! filtered to published posts; storage, routing and rendering live
//! elsewhere.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - search (weighted full-text and trigram ranking)
//!   - similarity (shared-tag lookup)
//!   - share (recommendation messages)
//!   - comment (reader comments)
//!   - corpus (JSON loading, listing and tag filter)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use postrank::core::search::RankedSearch;
//! use postrank::{Document, Query};
//!
//! let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let posts = vec![
//!     Document::new(1, "Django ORM in depth", "Querysets and managers.", date),
//!     Document::new(2, "Go channels", "Goroutines talk.", date),
//! ];
//!
//! let results = RankedSearch::default()
//!     .rank(&Query::parse("django orm", 500), &posts)
//!     .unwrap();
//! assert_eq!(results[0].document.id, 1);
//! ```

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{PostrankError, Result};
pub use core::search::{RankedSearch, SearchWeights, TrigramSearch};
pub use core::services::Services;
pub use core::similarity::SimilarityScorer;
pub use core::types::*;
