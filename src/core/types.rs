//! Core data types for postrank.
//!
//! This module defines the records the ranking core reads
//! (documents, queries) and the result pairs it produces.

use crate::core::error::{PostrankError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier assigned to a document by the persistence layer
pub type DocumentId = u64;

/// A published blog post as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    /// Unique document identifier
    pub id: DocumentId,

    /// Post title
    pub title: String,

    /// Post body text
    pub body: String,

    /// Publication timestamp
    pub publish: DateTime<Utc>,

    /// Tag slugs attached to the post
    pub tags: BTreeSet<String>,
}

impl Document {
    /// Create a document with no tags
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        body: impl Into<String>,
        publish: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            publish,
            tags: BTreeSet::new(),
        }
    }

    /// Builder-style helper to attach tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check that required text fields are present
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PostrankError::invalid_document(Some(self.id), "title"));
        }
        if self.body.trim().is_empty() {
            return Err(PostrankError::invalid_document(Some(self.id), "body"));
        }
        Ok(())
    }

    /// Number of tags this document shares with `other`
    pub fn shared_tag_count(&self, other: &Document) -> usize {
        self.tags.intersection(&other.tags).count()
    }
}

/// Document as it arrives from an untrusted source (JSON file, request body)
///
/// Every field is optional so that a missing field surfaces as
/// `InvalidDocument` rather than an opaque parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: Option<DocumentId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub publish: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<RawDocument> for Document {
    type Error = PostrankError;

    fn try_from(raw: RawDocument) -> Result<Self> {
        let id = raw
            .id
            .ok_or_else(|| PostrankError::invalid_document(None, "id"))?;
        let title = raw
            .title
            .ok_or_else(|| PostrankError::invalid_document(Some(id), "title"))?;
        let body = raw
            .body
            .ok_or_else(|| PostrankError::invalid_document(Some(id), "body"))?;
        let publish = raw
            .publish
            .ok_or_else(|| PostrankError::invalid_document(Some(id), "publish"))?;

        let document = Document::new(id, title, body, publish).with_tags(raw.tags);
        document.validate()?;
        Ok(document)
    }
}

/// Normalized user query
///
/// Built with [`Query::parse`]; surrounding whitespace is removed and
/// overlong input is truncated. An empty query is valid and matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(String);

impl Query {
    /// Normalize raw input, keeping at most `max_len` characters
    pub fn parse(raw: &str, max_len: usize) -> Self {
        let trimmed = raw.trim();
        let text = match trimmed.char_indices().nth(max_len) {
            Some((cut, _)) => trimmed[..cut].trim_end(),
            None => trimmed,
        };
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Search mode selecting the ranking function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Weighted title/body term relevance
    #[default]
    FullText,
    /// Title trigram similarity
    Trigram,
}

/// A document paired with its relevance score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredResult<'a> {
    pub document: &'a Document,

    /// Normalized relevance in [0, 1] (higher = more relevant)
    pub score: f32,
}

/// A document paired with the number of tags it shares with the target
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimilarityResult<'a> {
    pub document: &'a Document,
    pub shared_tags: usize,
}
