//! Corpus loading from JSON files.
//!
//! A corpus file is a JSON array of post objects. Records are read
//! leniently and then checked one by one, so a missing field is
//! reported as `InvalidDocument` with the offending id.

use crate::core::error::{PostrankError, Result};
use crate::core::types::{Document, DocumentId, RawDocument};
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

/// Load every document from the JSON file at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let documents = parse(&contents)?;

    tracing::debug!(path = ?path, documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Parse a JSON array of documents
pub fn parse(json: &str) -> Result<Vec<Document>> {
    let raw: Vec<RawDocument> = serde_json::from_str(json)?;
    raw.into_iter().map(Document::try_from).collect()
}

/// Find the document with `id`
pub fn find(documents: &[Document], id: DocumentId) -> Result<&Document> {
    documents
        .iter()
        .find(|d| d.id == id)
        .ok_or(PostrankError::DocumentNotFound(id))
}

/// Posts in listing order: newest first, then by id
pub fn newest_first(documents: &[Document]) -> Vec<&Document> {
    let mut listed: Vec<&Document> = documents.iter().collect();
    listed.sort_by_key(|d| (Reverse(d.publish), d.id));
    listed
}

/// Posts carrying the tag slug `tag`, in listing order
pub fn with_tag<'a>(documents: &'a [Document], tag: &str) -> Vec<&'a Document> {
    let mut listed = newest_first(documents);
    listed.retain(|d| d.tags.contains(tag));
    listed
}
