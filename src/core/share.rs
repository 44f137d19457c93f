//! "Recommend this post" messages.
//!
//! Validates the share form a reader submits and composes the subject
//! and body handed to the mail transport. Sending is the caller's job.
//! The message goes out from the site's configured address; the
//! reader's own address is only used as `reply_to`.

use crate::core::error::{PostrankError, Result};
use crate::core::types::Document;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of the sender name, in characters
pub const MAX_NAME_LENGTH: usize = 25;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$").unwrap()
});

/// Share form as submitted by a reader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareForm {
    /// Sender display name
    pub name: String,

    /// Sender address
    pub email: String,

    /// Recipient address
    pub to: String,

    /// Optional personal note
    #[serde(default)]
    pub comments: String,
}

impl ShareForm {
    /// Validate every field, reporting the first failure
    pub fn validate(&self) -> Result<()> {
        validate_required("name", &self.name, MAX_NAME_LENGTH)?;
        validate_email("email", &self.email)?;
        validate_email("to", &self.to)?;
        Ok(())
    }
}

/// Whether `value` looks like a deliverable address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub(crate) fn validate_required(field: &str, value: &str, max_chars: usize) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "This field is required"));
    }
    if value.chars().count() > max_chars {
        return Err(invalid(
            field,
            &format!("Ensure this value has at most {max_chars} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_email(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(field, "This field is required"));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(invalid(field, "Enter a valid email address"));
    }
    Ok(())
}

pub(crate) fn invalid(field: &str, message: &str) -> PostrankError {
    PostrankError::InvalidForm {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// A composed recommendation ready for the mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Site sender address
    pub from: String,
    /// The recommending reader
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Recommendation {
    /// Compose a recommendation of `document` at `post_url`, sent from `sender`
    ///
    /// # Errors
    ///
    /// - `InvalidForm`: a form field failed validation
    /// - `InvalidDocument`: the post has a blank title or body
    pub fn compose(
        form: &ShareForm,
        document: &Document,
        post_url: &str,
        sender: &str,
    ) -> Result<Self> {
        form.validate()?;
        document.validate()?;

        let name = form.name.trim();
        let subject = format!("{name} recommends you read {}", document.title);
        let body = format!(
            "Read {} at {post_url}\n\n{name}'s comments: {}",
            document.title,
            form.comments.trim()
        );

        Ok(Self {
            from: sender.to_string(),
            reply_to: form.email.trim().to_string(),
            to: form.to.trim().to_string(),
            subject,
            body,
        })
    }
}

/// Canonical post path: `/blog/YYYY/M/D/slug/`
pub fn post_path(document: &Document) -> String {
    use chrono::Datelike;

    let date = document.publish.date_naive();
    format!(
        "/blog/{}/{}/{}/{}/",
        date.year(),
        date.month(),
        date.day(),
        slugify(&document.title)
    )
}

/// Lowercase ASCII slug: words joined by hyphens
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
