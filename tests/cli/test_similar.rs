//! Tests for the similar CLI command

use crate::common::{blog_corpus, create_test_services, write_corpus};
use postrank::cli::commands::similar::{build_output, execute, SimilarArgs};
use postrank::cli::OutputFormat;
use std::path::PathBuf;

fn args(id: u64, limit: Option<usize>) -> SimilarArgs {
    SimilarArgs {
        id,
        corpus: PathBuf::from("unused.json"),
        limit,
    }
}

/// Posts sharing more tags come first, then newer posts
#[test]
fn test_similar_returns_ranked_neighbours() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let output = build_output(&args(1, None), &corpus, &services).unwrap();

    assert_eq!(output.post, 1);
    assert_eq!(output.tags, vec!["django", "orm", "python"]);

    let got: Vec<(u64, usize, &str)> = output
        .results
        .iter()
        .map(|r| (r.id, r.shared_tags, r.publish.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![(2, 2, "2024-02-03"), (5, 1, "2024-03-08"), (6, 1, "2023-06-01")]
    );
}

#[test]
fn test_similar_respects_limit() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let output = build_output(&args(2, Some(1)), &corpus, &services).unwrap();

    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].id, 1);
    assert_eq!(output.results[0].shared_tags, 2);
}

#[test]
fn test_similar_no_matches() {
    let services = create_test_services();
    let corpus = blog_corpus();

    // The Go post shares no tag with anything else
    let output = build_output(&args(4, None), &corpus, &services).unwrap();
    assert!(output.results.is_empty());
}

#[test]
fn test_similar_unknown_post() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let err = build_output(&args(999, None), &corpus, &services).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_similar_execute_human_and_json() {
    let services = create_test_services();
    let file = write_corpus(&blog_corpus());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let mut similar_args = args(1, None);
        similar_args.corpus = file.path().to_path_buf();

        let result = execute(similar_args, &services, format);
        assert!(result.is_ok(), "Similar should succeed: {:?}", result.err());
    }
}

#[test]
fn test_similar_execute_unknown_post() {
    let services = create_test_services();
    let file = write_corpus(&blog_corpus());

    let mut similar_args = args(999, None);
    similar_args.corpus = file.path().to_path_buf();

    let err = execute(similar_args, &services, OutputFormat::Human).expect_err("Unknown id should fail");
    assert!(err.to_string().contains("999"), "got: {err}");
}
