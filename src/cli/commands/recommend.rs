//! Recommend command - compose a "recommend this post" message

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::corpus;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::share::{post_path, Recommendation, ShareForm};
use crate::core::types::{Document, DocumentId};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the recommend command
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Id of the post to recommend
    pub id: DocumentId,

    /// JSON file holding the published posts
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Sender name
    #[arg(long)]
    pub name: String,

    /// Sender email address
    #[arg(long)]
    pub email: String,

    /// Recipient email address
    #[arg(long)]
    pub to: String,

    /// Personal note added to the message
    #[arg(long, default_value = "")]
    pub comments: String,

    /// Site root used to build the post link
    #[arg(long, env = "POSTRANK_BASE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,
}

/// Compose the recommendation for the command's post in `documents`
pub fn build_output(
    args: &RecommendArgs,
    documents: &[Document],
    services: &Services,
) -> Result<Recommendation> {
    let post = corpus::find(documents, args.id)?;

    let form = ShareForm {
        name: args.name.clone(),
        email: args.email.clone(),
        to: args.to.clone(),
        comments: args.comments.clone(),
    };
    let url = format!("{}{}", args.base_url.trim_end_matches('/'), post_path(post));

    let recommendation =
        Recommendation::compose(&form, post, &url, &services.config.share.from_address)?;
    tracing::info!(post = post.id, to = %recommendation.to, "recommendation composed");

    Ok(recommendation)
}

/// Execute the recommend command
pub fn execute(
    args: RecommendArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let documents = corpus::load(&args.corpus)?;
    let recommendation = build_output(&args, &documents, services)?;

    match format {
        OutputFormat::Human => {
            print_header(&recommendation.subject);
            println!("{} {}", colors::dim("From:"), recommendation.from);
            println!("{} {}", colors::dim("Reply-To:"), recommendation.reply_to);
            println!("{} {}", colors::dim("To:"), recommendation.to);
            println!();
            println!("{}", recommendation.body);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
    }

    Ok(())
}
