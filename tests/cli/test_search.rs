//! Tests for the search CLI command
//!
//! Covers both ranking modes, output formats, and corpus errors.

use crate::common::{blog_corpus, create_test_services, date, post, write_corpus};
use postrank::cli::commands::search::{build_output, execute, ModeArg, SearchArgs};
use postrank::cli::OutputFormat;
use postrank::SearchMode;
use std::path::PathBuf;

fn args(query: &str, corpus: PathBuf) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        corpus,
        mode: ModeArg::FullText,
        limit: None,
        titles_only: false,
    }
}

#[test]
fn test_search_output_ranks_and_numbers_results() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let output = build_output(&args("  django orm ", PathBuf::new()), &corpus, &services).unwrap();

    assert_eq!(output.query, "django orm");
    assert_eq!(output.mode, SearchMode::FullText);
    assert_eq!(output.total_results, 4);

    let got: Vec<(usize, u64)> = output.results.iter().map(|r| (r.rank, r.id)).collect();
    assert_eq!(got, vec![(1, 1), (2, 5), (3, 2), (4, 3)]);
    assert!((output.results[0].score - 1.0).abs() < 1e-6);
    assert!(output.results.iter().all(|r| r.excerpt.is_some()));
}

#[test]
fn test_search_limit_keeps_total() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let mut search_args = args("django", PathBuf::new());
    search_args.limit = Some(2);
    search_args.titles_only = true;

    let output = build_output(&search_args, &corpus, &services).unwrap();

    assert_eq!(output.results.len(), 2);
    assert!(output.total_results > 2);
    assert!(output.results.iter().all(|r| r.excerpt.is_none()));
}

#[test]
fn test_search_trigram_mode() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let mut search_args = args("reinhart", PathBuf::new());
    search_args.mode = ModeArg::Trigram;

    let output = build_output(&search_args, &corpus, &services).unwrap();
    assert_eq!(output.mode, SearchMode::Trigram);
    assert_eq!(output.results[0].id, 3);
}

#[test]
fn test_search_empty_results() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let output = build_output(&args("nonexistent_term_xyz", PathBuf::new()), &corpus, &services)
        .unwrap();
    assert_eq!(output.total_results, 0);
    assert!(output.results.is_empty());
}

/// Test search with valid query in both output formats
#[test]
fn test_search_execute_human_and_json() {
    let services = create_test_services();
    let file = write_corpus(&blog_corpus());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args("django orm", file.path().to_path_buf()), &services, format);
        assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
    }
}

/// Test search against a missing corpus file
#[test]
fn test_search_missing_corpus() {
    let services = create_test_services();

    let result = execute(
        args("django", PathBuf::from("/nonexistent/posts.json")),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_err(), "Missing corpus should fail");
}

/// Test search over a corpus holding a post with a blank body
#[test]
fn test_search_invalid_document() {
    let services = create_test_services();
    let mut corpus = blog_corpus();
    corpus.push(post(42, "Draft", " ", date(2024, 4, 1), &[]));
    let file = write_corpus(&corpus);

    let result = execute(
        args("django", file.path().to_path_buf()),
        &services,
        OutputFormat::Json,
    );
    let err = result.expect_err("Blank body should be rejected");
    assert!(err.to_string().contains("body"), "got: {err}");
}
