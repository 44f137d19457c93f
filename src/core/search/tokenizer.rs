//! Text normalization shared by the ranking functions.
//!
//! Words are maximal runs of Unicode letters and digits, lowercased.
//! Full-text ranking additionally drops common English stop words;
//! trigram matching keeps every word.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Regex patterns compiled once at startup
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have",
        "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "my", "no",
        "not", "of", "on", "or", "our", "she", "so", "such", "that", "the", "their", "then",
        "there", "these", "they", "this", "to", "was", "we", "were", "what", "when", "which",
        "who", "will", "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Iterate over the lowercased words of `text`
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}

/// Lowercased words of `text` with stop words removed
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).filter(|w| !is_stop_word(w)).collect()
}

/// Distinct query terms, in first-seen order
pub fn query_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Set of trigrams over the words of `text`
///
/// Each word is padded with two spaces in front and one behind before
/// taking every three-character window, so "cat" yields
/// `"  c"`, `" ca"`, `"cat"`, `"at "`.
pub fn trigrams(text: &str) -> HashSet<String> {
    let mut grams = HashSet::new();
    for word in words(text) {
        let padded: Vec<char> = format!("  {word} ").chars().collect();
        for window in padded.windows(3) {
            grams.insert(window.iter().collect());
        }
    }
    grams
}
