//! Frequency based keyword extraction

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Number of keywords returned when the caller has no preference
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Common English function words that never count as keywords
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "also", "now", "here",
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid keyword filter"));

/// Whether `word` (already lowercased) is in the stop-word list
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Return up to `limit` distinct keywords ordered by frequency
///
/// Words of three characters or fewer and stop words are skipped.
/// Equal frequencies keep the order in which the words first appeared.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for word in cleaned.split_whitespace() {
        if word.chars().count() <= 3 || is_stop_word(word) {
            continue;
        }
        match positions.get(word) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(word.to_string(), counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    trace!(distinct = counts.len(), limit, "extracted keyword candidates");

    counts.into_iter().take(limit).map(|(word, _)| word).collect()
}
