//! Similar command - posts sharing tags with a given post

use crate::cli::output::{colors, print_warning};
use crate::cli::OutputFormat;
use crate::core::corpus;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::types::{Document, DocumentId};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the similar command
#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Id of the post to find neighbours for
    pub id: DocumentId,

    /// JSON file holding the published posts
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Maximum number of similar posts (defaults to configuration)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Similar post item
#[derive(Debug, Serialize)]
pub struct SimilarItem {
    pub id: DocumentId,
    pub title: String,
    pub shared_tags: usize,
    pub publish: String,
}

/// Similar posts response
#[derive(Debug, Serialize)]
pub struct SimilarResponseOutput {
    pub post: DocumentId,
    pub title: String,
    pub tags: Vec<String>,
    pub results: Vec<SimilarItem>,
}

/// Find posts similar to the command's target post in `documents`
pub fn build_output(
    args: &SimilarArgs,
    documents: &[Document],
    services: &Services,
) -> Result<SimilarResponseOutput> {
    let target = corpus::find(documents, args.id)?;
    let similar = services.similarity.similar(target, documents, args.limit)?;

    Ok(SimilarResponseOutput {
        post: target.id,
        title: target.title.clone(),
        tags: target.tags.iter().cloned().collect(),
        results: similar
            .iter()
            .map(|r| SimilarItem {
                id: r.document.id,
                title: r.document.title.clone(),
                shared_tags: r.shared_tags,
                publish: r.document.publish.format("%Y-%m-%d").to_string(),
            })
            .collect(),
    })
}

/// Execute the similar command
pub fn execute(
    args: SimilarArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let documents = corpus::load(&args.corpus)?;
    let output = build_output(&args, &documents, services)?;
    if output.tags.is_empty() {
        print_warning(&format!("Post {} has no tags", output.post));
    }

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::title(&output.title),
                colors::dim(&format!("[{}]", output.tags.join(", ")))
            );
            if output.results.is_empty() {
                println!("No similar posts");
            } else {
                for result in &output.results {
                    println!(
                        "  {} {} {}",
                        colors::number(&format!("{}x", result.shared_tags)),
                        colors::title(&result.title),
                        colors::dim(&format!("(id: {}, {})", result.id, result.publish))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
