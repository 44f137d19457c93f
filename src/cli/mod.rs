//! CLI adapter for postrank
//!
//! Provides a command-line interface over the ranking core. Posts are
//! read from a JSON corpus file; results are printed for humans or as
//! JSON for scripting.
//!
//! Commands load the corpus themselves and share one [`Services`]
//! built from the loaded configuration:
//!
//! - `search`: full-text or trigram ranking
//! - `similar`: posts sharing tags with a post
//! - `recommend`: compose a share message
//! - `posts`: list posts, optionally by tag
//! - `comment`: validate a reader comment
//! - `show-config`, `completions`
//!
//! [`Services`]: crate::core::services::Services

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// postrank - blog post ranking
///
/// Rank posts for a search query, find similar posts by shared tags,
/// and compose "recommend this post" messages.
#[derive(Parser, Debug)]
#[command(name = "postrank")]
#[command(version)]
#[command(about = "Relevance ranking and similar posts for a blog", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank posts in a corpus for a query
    Search(commands::SearchArgs),

    /// List posts sharing tags with a given post
    Similar(commands::SimilarArgs),

    /// Compose a recommendation message for a post (does not send it)
    Recommend(commands::RecommendArgs),

    /// List posts newest first, optionally only those with a tag
    Posts(commands::PostsArgs),

    /// Validate a reader comment on a post (does not store it)
    Comment(commands::CommentArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  postrank completions bash > ~/.local/share/bash-completion/completions/postrank
    ///   zsh:   postrank completions zsh > ~/.zfunc/_postrank
    ///   fish:  postrank completions fish > ~/.config/fish/completions/postrank.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    let format = cli.format;

    // Commands that need neither configuration nor services
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::Posts(args) => return commands::posts::execute(args, format),
        Commands::Comment(args) => return commands::comment::execute(args, format),
        command => command,
    };

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match command {
        Commands::Search(args) => commands::search::execute(args, &services, format),
        Commands::Similar(args) => commands::similar::execute(args, &services, format),
        Commands::Recommend(args) => commands::recommend::execute(args, &services, format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, format),
        Commands::Completions(_) | Commands::Posts(_) | Commands::Comment(_) => {
            unreachable!() // Handled above
        }
    }
}
