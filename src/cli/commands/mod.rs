//! CLI command implementations
//!
//! One module per subcommand: a clap `Args` struct, a pure
//! `build_output` where there is data to compute, and `execute` for
//! loading input and printing.

pub mod comment;
pub mod completions;
pub mod config;
pub mod posts;
pub mod recommend;
pub mod search;
pub mod similar;

// Re-export argument types for use in mod.rs
pub use comment::CommentArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use posts::PostsArgs;
pub use recommend::RecommendArgs;
pub use search::SearchArgs;
pub use similar::SimilarArgs;
