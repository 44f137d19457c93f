//! Error types and error handling for postrank.
//!
//! This module defines the error types used throughout the
//! crate. An empty query or a search with no matches is never an
//! error; those yield empty result lists.

use crate::core::types::DocumentId;
use thiserror::Error;

/// Result type alias for postrank operations
pub type Result<T> = std::result::Result<T, PostrankError>;

/// Main error type for postrank
#[derive(Error, Debug)]
pub enum PostrankError {
    #[error("Invalid document{}: missing or blank field '{field}'", display_id(.id))]
    InvalidDocument {
        id: Option<DocumentId>,
        field: String,
    },

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("Invalid form field '{field}': {message}")]
    InvalidForm { field: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn display_id(id: &Option<DocumentId>) -> String {
    match id {
        Some(id) => format!(" {id}"),
        None => String::new(),
    }
}

impl PostrankError {
    /// Shorthand for a document failing validation on `field`
    pub fn invalid_document(id: Option<DocumentId>, field: &str) -> Self {
        PostrankError::InvalidDocument {
            id,
            field: field.to_string(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostrankError::DocumentNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            PostrankError::InvalidDocument { .. }
                | PostrankError::InvalidForm { .. }
                | PostrankError::ConfigError(_)
        )
    }
}
