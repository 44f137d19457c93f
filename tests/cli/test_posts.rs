//! Tests for the posts CLI command

use crate::common::{blog_corpus, write_corpus};
use postrank::cli::commands::posts::{build_output, execute, PostsArgs};
use postrank::cli::OutputFormat;
use std::path::PathBuf;

fn args(tag: Option<&str>, limit: Option<usize>) -> PostsArgs {
    PostsArgs {
        corpus: PathBuf::from("unused.json"),
        tag: tag.map(str::to_string),
        limit,
    }
}

#[test]
fn test_posts_newest_first() {
    let corpus = blog_corpus();
    let output = build_output(&args(None, None), &corpus);

    assert_eq!(output.total_posts, 6);
    assert_eq!(output.matching, 6);
    let ids: Vec<u64> = output.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 4, 2, 1, 3, 6]);
    assert_eq!(output.posts[0].path, "/blog/2024/3/8/weekly-notes/");
}

#[test]
fn test_posts_by_tag() {
    let corpus = blog_corpus();
    let output = build_output(&args(Some("django"), None), &corpus);

    assert_eq!(output.total_posts, 6);
    assert_eq!(output.matching, 2);
    let ids: Vec<u64> = output.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_posts_limit_keeps_counts() {
    let corpus = blog_corpus();
    let output = build_output(&args(Some("python"), Some(2)), &corpus);

    assert_eq!(output.matching, 4);
    assert_eq!(output.posts.len(), 2);
    assert_eq!(output.posts[0].id, 5);
}

#[test]
fn test_posts_unknown_tag() {
    let corpus = blog_corpus();
    let output = build_output(&args(Some("haskell"), None), &corpus);

    assert_eq!(output.matching, 0);
    assert!(output.posts.is_empty());
}

#[test]
fn test_posts_execute_human_and_json() {
    let file = write_corpus(&blog_corpus());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let mut posts_args = args(Some("python"), None);
        posts_args.corpus = file.path().to_path_buf();

        let result = execute(posts_args, format);
        assert!(result.is_ok(), "Posts should succeed: {:?}", result.err());
    }
}
