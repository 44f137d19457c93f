//! Config file discovery following the XDG base directory layout.

use std::env;
use std::path::PathBuf;

/// File name looked up in the working directory when no XDG file exists
pub const LOCAL_CONFIG_FILE: &str = "postrank.toml";

/// Where postrank looks for its configuration
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve the config directory from the environment
    ///
    /// `POSTRANK_CONFIG_DIR` wins, then `$XDG_CONFIG_HOME/postrank`,
    /// then `~/.config/postrank`.
    pub fn new() -> Self {
        let config_dir = match (env::var("POSTRANK_CONFIG_DIR"), env::var("XDG_CONFIG_HOME")) {
            (Ok(dir), _) => PathBuf::from(dir),
            (_, Ok(base)) => PathBuf::from(base).join("postrank"),
            _ => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("postrank"),
        };
        Self { config_dir }
    }

    /// Per-user config file, `POSTRANK_CONFIG_FILE` overriding the default name
    pub fn config_file(&self) -> PathBuf {
        env::var("POSTRANK_CONFIG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| self.config_dir.join("config.toml"))
    }

    /// Candidate files in lookup order
    pub fn search_path(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(3);
        if let Ok(explicit) = env::var("POSTRANK_CONFIG") {
            paths.push(PathBuf::from(explicit));
        }
        paths.push(self.config_file());
        paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
        paths
    }

    /// The file configuration is read from, if any
    ///
    /// An explicit `POSTRANK_CONFIG` is returned even when missing so
    /// the load reports it instead of silently using defaults.
    pub fn resolve_config_file(&self) -> Option<PathBuf> {
        if let Ok(explicit) = env::var("POSTRANK_CONFIG") {
            return Some(PathBuf::from(explicit));
        }
        self.search_path().into_iter().find(|p| p.exists())
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
