//! postrank CLI - rank blog posts from the command line
//!
//! # Examples
//!
//! ```bash
//! # Rank posts for a query
//! postrank search "django orm" --corpus posts.json
//!
//! # Fuzzy title search
//! postrank search "djngo" --corpus posts.json --mode trigram
//!
//! # Posts similar to post 3
//! postrank similar 3 --corpus posts.json
//!
//! # Show configuration
//! postrank show-config
//! ```

use clap::Parser;
use postrank::cli::{run, Cli};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postrank=warn".into()),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
