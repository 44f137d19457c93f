//! Configuration management for postrank.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PostrankError, Result};
use crate::core::share::is_valid_email;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Weight of a title occurrence (0, 1]
    #[serde(default = "default_title_weight")]
    pub title_weight: f32,

    /// Weight of a body occurrence (0, 1]
    #[serde(default = "default_body_weight")]
    pub body_weight: f32,

    /// Minimum full-text score kept in results
    #[serde(default = "default_rank_threshold")]
    pub rank_threshold: f32,

    /// Trigram similarity a title must exceed
    #[serde(default = "default_trigram_threshold")]
    pub trigram_threshold: f32,

    /// Maximum query string length, in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Similar-post configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimilarityConfig {
    /// Number of similar posts returned when no limit is given
    #[serde(default = "default_similar_limit")]
    pub default_limit: usize,

    /// Upper bound on any requested limit
    #[serde(default = "default_similar_max_limit")]
    pub max_limit: usize,
}

/// Recommendation mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Address recommendations are sent from
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

// Default value functions
fn default_title_weight() -> f32 {
    1.0
}

fn default_body_weight() -> f32 {
    0.4
}

fn default_rank_threshold() -> f32 {
    0.3
}

fn default_trigram_threshold() -> f32 {
    0.1
}

fn default_max_query_length() -> usize {
    500
}

fn default_similar_limit() -> usize {
    4
}

fn default_similar_max_limit() -> usize {
    50
}

fn default_from_address() -> String {
    "noreply@localhost.localdomain".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: default_title_weight(),
            body_weight: default_body_weight(),
            rank_threshold: default_rank_threshold(),
            trigram_threshold: default_trigram_threshold(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            from_address: default_from_address(),
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            default_limit: default_similar_limit(),
            max_limit: default_similar_max_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PostrankError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. POSTRANK_CONFIG env var
    /// 2. XDG config file (~/.config/postrank/config.toml)
    /// 3. ./postrank.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = match xdg.resolve_config_file() {
            Some(path) => {
                tracing::debug!(path = ?path, "reading config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        // Override with environment variables
        config.merge_env();

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Search configuration
        override_from_env("POSTRANK_TITLE_WEIGHT", &mut self.search.title_weight);
        override_from_env("POSTRANK_BODY_WEIGHT", &mut self.search.body_weight);
        override_from_env("POSTRANK_RANK_THRESHOLD", &mut self.search.rank_threshold);
        override_from_env(
            "POSTRANK_TRIGRAM_THRESHOLD",
            &mut self.search.trigram_threshold,
        );
        override_from_env(
            "POSTRANK_MAX_QUERY_LENGTH",
            &mut self.search.max_query_length,
        );

        // Similarity configuration
        override_from_env("POSTRANK_SIMILAR_LIMIT", &mut self.similarity.default_limit);
        override_from_env(
            "POSTRANK_SIMILAR_MAX_LIMIT",
            &mut self.similarity.max_limit,
        );

        override_from_env("POSTRANK_FROM_ADDRESS", &mut self.share.from_address);
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;

        for (name, weight) in [
            ("Title weight", search.title_weight),
            ("Body weight", search.body_weight),
        ] {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(PostrankError::ConfigError(format!(
                    "{name} must be in (0, 1], got {weight}"
                )));
            }
        }

        if search.body_weight > search.title_weight {
            return Err(PostrankError::ConfigError(
                "Body weight cannot exceed title weight".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&search.rank_threshold) {
            return Err(PostrankError::ConfigError(
                "Rank threshold must be in [0, 1]".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&search.trigram_threshold) {
            return Err(PostrankError::ConfigError(
                "Trigram threshold must be in [0, 1]".to_string(),
            ));
        }

        if search.max_query_length == 0 {
            return Err(PostrankError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        // Validate similarity config
        if self.similarity.default_limit > self.similarity.max_limit {
            return Err(PostrankError::ConfigError(
                "Default similar limit cannot exceed max limit".to_string(),
            ));
        }

        if !is_valid_email(&self.share.from_address) {
            return Err(PostrankError::ConfigError(format!(
                "Sender address is not a valid email: {:?}",
                self.share.from_address
            )));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Title weight: {}", self.search.title_weight);
        tracing::info!("  Body weight: {}", self.search.body_weight);
        tracing::info!("  Rank threshold: {}", self.search.rank_threshold);
        tracing::info!("  Trigram threshold: {}", self.search.trigram_threshold);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Similar limit: {}", self.similarity.default_limit);
        tracing::info!("  Similar max limit: {}", self.similarity.max_limit);
        tracing::info!("  Sender address: {}", self.share.from_address);
    }
}

/// Replace `target` with the parsed value of `var`, ignoring unparsable values
fn override_from_env<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(raw) = env::var(var) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!("Ignoring unparsable {}={:?}", var, raw),
        }
    }
}
