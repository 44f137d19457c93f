// Integration tests for search functionality

use crate::common::{blog_corpus, create_test_services, date, post};
use postrank::core::search::trigram_similarity;
use postrank::{PostrankError, Query, RankedSearch, SearchMode, SearchWeights, TrigramSearch};

#[test]
fn test_title_match_ranks_first() {
    let corpus = blog_corpus();
    let results = RankedSearch::default()
        .rank(&Query::parse("django orm", 500), &corpus)
        .expect("Search failed");

    assert!(!results.is_empty(), "Expected at least one result");
    assert_eq!(results[0].document.id, 1);
    assert!(results[0].score >= 0.3);
}

#[test]
fn test_unrelated_posts_excluded() {
    let corpus = blog_corpus();
    let results = RankedSearch::default()
        .rank(&Query::parse("django orm", 500), &corpus)
        .expect("Search failed");

    let ids: Vec<u64> = results.iter().map(|r| r.document.id).collect();
    assert!(!ids.contains(&4), "Go post should not match");
    assert!(!ids.contains(&6), "Packaging post should not match");
}

#[test]
fn test_full_ranking_order() {
    let corpus = blog_corpus();
    let results = RankedSearch::default()
        .rank(&Query::parse("django orm", 500), &corpus)
        .expect("Search failed");

    // 1: both terms in title (1.0)
    // 5: both terms twice in body (0.64)
    // 2, 3: "django" in title only (0.5)
    let ids: Vec<u64> = results.iter().map(|r| r.document.id).collect();
    assert_eq!(ids, vec![1, 5, 2, 3]);
}

#[test]
fn test_scores_are_normalized() {
    let corpus = blog_corpus();
    let results = RankedSearch::default()
        .rank(&Query::parse("django python jazz", 500), &corpus)
        .expect("Search failed");

    for r in &results {
        assert!(
            (0.3..=1.0).contains(&r.score),
            "score {} outside [0.3, 1]",
            r.score
        );
    }
}

#[test]
fn test_query_case_insensitive() {
    let corpus = blog_corpus();
    let search = RankedSearch::default();

    let lower = search.rank(&Query::parse("django", 500), &corpus).unwrap();
    let upper = search.rank(&Query::parse("DJANGO", 500), &corpus).unwrap();

    let a: Vec<u64> = lower.iter().map(|r| r.document.id).collect();
    let b: Vec<u64> = upper.iter().map(|r| r.document.id).collect();
    assert_eq!(a, b);
}

#[test]
fn test_search_no_results() {
    let corpus = blog_corpus();
    let results = RankedSearch::default()
        .rank(&Query::parse("nonexistent_term_xyz123", 500), &corpus)
        .expect("Search failed");

    assert_eq!(results.len(), 0, "Expected no results");
}

#[test]
fn test_empty_query_no_results() {
    let corpus = blog_corpus();
    for raw in ["", "   ", "\n\t"] {
        let results = RankedSearch::default()
            .rank(&Query::parse(raw, 500), &corpus)
            .unwrap();
        assert!(results.is_empty(), "query {raw:?} should match nothing");
    }
}

#[test]
fn test_lazy_corpus_consumed_once() {
    let corpus = blog_corpus();
    let mut pulled = 0;
    let lazy = corpus.iter().inspect(|_| pulled += 1);

    let results = RankedSearch::default()
        .rank(&Query::parse("django", 500), lazy)
        .unwrap();

    assert!(!results.is_empty());
    assert_eq!(pulled, corpus.len());
}

#[test]
fn test_invalid_document_reported() {
    let mut corpus = blog_corpus();
    corpus.push(post(99, "Broken", "   ", date(2024, 1, 1), &[]));

    let result = RankedSearch::default().rank(&Query::parse("django", 500), &corpus);
    match result {
        Err(PostrankError::InvalidDocument { id, field }) => {
            assert_eq!(id, Some(99));
            assert_eq!(field, "body");
        }
        other => panic!("Expected InvalidDocument, got {other:?}"),
    }
}

#[test]
fn test_stricter_threshold_drops_partial_matches() {
    let corpus = blog_corpus();
    let search = RankedSearch::new(SearchWeights {
        threshold: 0.9,
        ..SearchWeights::default()
    });

    let results = search.rank(&Query::parse("django orm", 500), &corpus).unwrap();
    let ids: Vec<u64> = results.iter().map(|r| r.document.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_trigram_finds_misspelling() {
    let corpus = blog_corpus();
    let results = TrigramSearch::default()
        .rank(&Query::parse("reinhart", 500), &corpus)
        .unwrap();

    assert!(!results.is_empty());
    assert_eq!(results[0].document.id, 3);
    assert!(results.iter().all(|r| r.score > 0.1));
}

#[test]
fn test_trigram_similarity_symmetric() {
    let a = trigram_similarity("django orm", "orm for django");
    let b = trigram_similarity("orm for django", "django orm");
    assert!((a - b).abs() < 1e-6);
}

#[test]
fn test_services_rank_modes() {
    let services = create_test_services();
    let corpus = blog_corpus();

    let full = services
        .rank(SearchMode::FullText, "concurrency", &corpus)
        .unwrap();
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].document.id, 4);

    let fuzzy = services
        .rank(SearchMode::Trigram, "concurency", &corpus)
        .unwrap();
    assert_eq!(fuzzy[0].document.id, 4);
}
