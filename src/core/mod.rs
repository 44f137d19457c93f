//! Core domain logic (adapter-agnostic)
//!
//! This module contains all ranking logic that is independent
//! of how documents are fetched or results are rendered.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, queries and result pairs
//! - **xdg**: XDG directory handling
//! - **search**: Full-text and trigram ranking
//! - **similarity**: Shared-tag similar posts
//! - **share**: Recommendation messages
//! - **comment**: Reader comments
//! - **corpus**: JSON corpus loading, tag filter and listing order
//! - **services**: Unified service container

pub mod comment;
pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod services;
pub mod share;
pub mod similarity;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PostrankError, Result};
pub use services::Services;
