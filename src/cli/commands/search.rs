//! Search command - rank posts for a query

use crate::cli::output::{colors, excerpt};
use crate::cli::OutputFormat;
use crate::core::corpus;
use crate::core::error::Result;
use crate::core::services::Services;
use crate::core::types::{Document, DocumentId, SearchMode};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Ranking mode selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Weighted title and body relevance
    #[default]
    FullText,
    /// Fuzzy title matching
    Trigram,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::FullText => SearchMode::FullText,
            ModeArg::Trigram => SearchMode::Trigram,
        }
    }
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// JSON file holding the published posts
    #[arg(long, short = 'c')]
    pub corpus: PathBuf,

    /// Ranking mode
    #[arg(long, short = 'm', value_enum, default_value = "full-text")]
    pub mode: ModeArg,

    /// Maximum number of results to print
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show titles (no excerpt)
    #[arg(long)]
    pub titles_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: DocumentId,
    pub title: String,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub mode: SearchMode,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Rank `documents` for the command's query
pub fn build_output(
    args: &SearchArgs,
    documents: &[Document],
    services: &Services,
) -> Result<SearchResponseOutput> {
    let mode = SearchMode::from(args.mode);
    let ranked = services.rank(mode, &args.query, documents)?;

    Ok(SearchResponseOutput {
        query: services.parse_query(&args.query).as_str().to_string(),
        mode,
        total_results: ranked.len(),
        results: ranked
            .iter()
            .take(args.limit.unwrap_or(usize::MAX))
            .enumerate()
            .map(|(i, r)| SearchResultItem {
                rank: i + 1,
                id: r.document.id,
                title: r.document.title.clone(),
                score: r.score,
                excerpt: if args.titles_only {
                    None
                } else {
                    Some(excerpt(&r.document.body, 160))
                },
            })
            .collect(),
    })
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let documents = corpus::load(&args.corpus)?;
    let output = build_output(&args, &documents, services)?;

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&output.query));
            } else {
                println!(
                    "Found {} result(s) for '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&output.query)
                );

                for result in &output.results {
                    println!(
                        "[{}] {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::title(&result.title),
                        colors::dim(&format!("(id: {}, score: {:.2})", result.id, result.score))
                    );
                    if let Some(text) = &result.excerpt {
                        println!("    {}", colors::dim(text));
                        println!();
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
