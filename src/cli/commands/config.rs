//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::{SearchConfig, ShareConfig, SimilarityConfig};
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as TOML, ready to save as a config file
    #[arg(long)]
    pub toml: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was read from; `None` when running on defaults
    pub config_file: Option<String>,
    pub search: SearchConfig,
    pub similarity: SimilarityConfig,
    pub share: ShareConfig,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    if args.toml {
        print!("{}", toml::to_string_pretty(config.as_ref())?);
        return Ok(());
    }

    let response = ConfigResponse {
        config_file: XdgDirs::new()
            .resolve_config_file()
            .map(|p| p.to_string_lossy().into_owned()),
        search: config.search.clone(),
        similarity: config.similarity.clone(),
        share: config.share.clone(),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(defaults)")
            );
            println!("  search:");
            println!("    title_weight: {}", response.search.title_weight);
            println!("    body_weight: {}", response.search.body_weight);
            println!("    rank_threshold: {}", response.search.rank_threshold);
            println!("    trigram_threshold: {}", response.search.trigram_threshold);
            println!("    max_query_length: {}", response.search.max_query_length);
            println!("  similarity:");
            println!("    default_limit: {}", response.similarity.default_limit);
            println!("    max_limit: {}", response.similarity.max_limit);
            println!("  share:");
            println!("    from_address: {}", response.share.from_address);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
