//! Word counting, reading time and small text helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Average adult reading speed used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid slug filter pattern"));
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid slug separator pattern"));

/// Count whitespace separated words
///
/// Runs of whitespace collapse, so `"a b  c"` has three words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes at [`WORDS_PER_MINUTE`]
///
/// Returns 0 for text without words and at least 1 otherwise.
pub fn reading_time(text: &str) -> usize {
    reading_time_with_rate(text, WORDS_PER_MINUTE)
}

/// Estimated reading time in minutes at a custom reading speed
pub fn reading_time_with_rate(text: &str, words_per_minute: usize) -> usize {
    let words = word_count(text);
    if words == 0 {
        return 0;
    }
    let rate = words_per_minute.max(1);
    words.div_ceil(rate)
}

/// Shorten text to `max_chars` characters, appending `...` when it was cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Build a URL slug: lowercase, punctuation removed, separators collapsed to `-`
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let dashed = SLUG_SEPARATORS.replace_all(&cleaned, "-");
    dashed.trim_matches('-').to_string()
}
