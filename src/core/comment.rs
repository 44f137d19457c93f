//! Reader comments on posts.
//!
//! A submitted [`CommentForm`] is validated and turned into a
//! [`Comment`] attached to a post. New comments are active; moderation
//! may later hide them, and only active comments are shown under a
//! post. Storing comments is left to the caller.

use crate::core::error::Result;
use crate::core::share::{validate_email, validate_required};
use crate::core::types::{Document, DocumentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a commenter name, in characters
pub const MAX_COMMENTER_NAME_LENGTH: usize = 80;

/// Comment form as submitted by a reader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentForm {
    /// Validate every field, reporting the first failure as `InvalidForm`
    pub fn validate(&self) -> Result<()> {
        validate_required("name", &self.name, MAX_COMMENTER_NAME_LENGTH)?;
        validate_email("email", &self.email)?;
        validate_required("body", &self.body, usize::MAX)?;
        Ok(())
    }
}

/// A comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub post: DocumentId,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub active: bool,
}

impl Comment {
    /// Build an active comment on `post` from a submitted form
    ///
    /// # Errors
    ///
    /// - `InvalidForm`: a form field failed validation
    /// - `InvalidDocument`: the post has a blank title or body
    pub fn submit(form: &CommentForm, post: &Document, created: DateTime<Utc>) -> Result<Self> {
        form.validate()?;
        post.validate()?;

        tracing::debug!(post = post.id, "comment accepted");

        Ok(Self {
            post: post.id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            body: form.body.trim().to_string(),
            created,
            active: true,
        })
    }
}

/// Active comments on `post`, oldest first
pub fn visible_for(comments: &[Comment], post: DocumentId) -> Vec<&Comment> {
    let mut visible: Vec<&Comment> = comments
        .iter()
        .filter(|c| c.post == post && c.active)
        .collect();
    visible.sort_by_key(|c| c.created);
    visible
}
