//! Posts command - list posts, optionally filtered by tag

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::corpus;
use crate::core::share::post_path;
use crate::core::types::{Document, DocumentId};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the posts command
#[derive(Args, Debug)]
pub struct PostsArgs {
    /// JSON file holding the published posts
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Only list posts carrying this tag slug
    #[arg(long, short = 't')]
    pub tag: Option<String>,

    /// Maximum number of posts to print
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Listed post
#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: DocumentId,
    pub title: String,
    pub publish: String,
    pub path: String,
    pub tags: Vec<String>,
}

/// Post listing
#[derive(Debug, Serialize)]
pub struct PostsResponseOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Published posts in the whole corpus
    pub total_posts: usize,
    /// Posts matching the tag filter
    pub matching: usize,
    pub posts: Vec<PostItem>,
}

/// List `documents` newest first, keeping only the tag when one is given
pub fn build_output(args: &PostsArgs, documents: &[Document]) -> PostsResponseOutput {
    let listed = match args.tag.as_deref() {
        Some(tag) => corpus::with_tag(documents, tag),
        None => corpus::newest_first(documents),
    };

    PostsResponseOutput {
        tag: args.tag.clone(),
        total_posts: documents.len(),
        matching: listed.len(),
        posts: listed
            .iter()
            .take(args.limit.unwrap_or(usize::MAX))
            .map(|d| PostItem {
                id: d.id,
                title: d.title.clone(),
                publish: d.publish.format("%Y-%m-%d").to_string(),
                path: post_path(d),
                tags: d.tags.iter().cloned().collect(),
            })
            .collect(),
    }
}

/// Execute the posts command
pub fn execute(
    args: PostsArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = corpus::load(&args.corpus)?;
    let output = build_output(&args, &documents);

    match format {
        OutputFormat::Human => {
            match &output.tag {
                Some(tag) => println!(
                    "{} of {} post(s) tagged '{}':\n",
                    colors::number(&output.matching.to_string()),
                    colors::number(&output.total_posts.to_string()),
                    colors::label(tag)
                ),
                None => println!(
                    "{} post(s):\n",
                    colors::number(&output.total_posts.to_string())
                ),
            }
            for post in &output.posts {
                println!(
                    "  {} {} {}",
                    colors::dim(&post.publish),
                    colors::title(&post.title),
                    colors::dim(&format!("(id: {}, {})", post.id, post.path))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
