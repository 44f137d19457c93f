//! Comment command - validate a reader comment on a post

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::comment::{Comment, CommentForm};
use crate::core::corpus;
use crate::core::error::Result;
use crate::core::types::{Document, DocumentId};
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the comment command
#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Id of the post being commented on
    pub id: DocumentId,

    /// JSON file holding the published posts
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Commenter name
    #[arg(long)]
    pub name: String,

    /// Commenter email address
    #[arg(long)]
    pub email: String,

    /// Comment text
    #[arg(long)]
    pub body: String,
}

/// Build the comment the reader submitted, timestamped `now`
pub fn build_output(
    args: &CommentArgs,
    documents: &[Document],
    now: DateTime<Utc>,
) -> Result<Comment> {
    let post = corpus::find(documents, args.id)?;
    let form = CommentForm {
        name: args.name.clone(),
        email: args.email.clone(),
        body: args.body.clone(),
    };
    Comment::submit(&form, post, now)
}

/// Execute the comment command
///
/// Prints the accepted comment; storing it is up to the caller.
pub fn execute(
    args: CommentArgs,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let documents = corpus::load(&args.corpus)?;
    let comment = build_output(&args, &documents, Utc::now())?;

    match format {
        OutputFormat::Human => {
            print_header(&format!("Comment on post {}", comment.post));
            println!(
                "{} {} <{}>",
                colors::dim("By:"),
                colors::title(&comment.name),
                comment.email
            );
            println!("{} {}", colors::dim("At:"), comment.created.to_rfc3339());
            println!();
            println!("{}", comment.body);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comment)?);
        }
    }

    Ok(())
}
