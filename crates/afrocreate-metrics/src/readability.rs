//! Flesch Reading Ease scoring
//!
//! Syllables are estimated with a vowel-group heuristic rather than a
//! pronunciation dictionary, so irregular words are miscounted now and then.
//! That is acceptable for a live editor badge.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::word_count;

static SILENT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^aeiouy]es|ed|[^aeiouy]e)$").expect("valid suffix pattern"));
static LEADING_Y: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").expect("valid prefix pattern"));
static VOWEL_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").expect("valid vowel pattern"));
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// Score at or above which text is considered easy to read
pub const GOOD_THRESHOLD: u8 = 70;
/// Score at or above which text is acceptable but could be simpler
pub const WARNING_THRESHOLD: u8 = 50;

/// Badge level derived from a readability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityLevel {
    /// Score of 70 or more
    Good,
    /// Score between 50 and 69
    Warning,
    /// Score below 50
    Poor,
}

impl ReadabilityLevel {
    /// Classify a 0..=100 score
    pub fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            ReadabilityLevel::Good
        } else if score >= WARNING_THRESHOLD {
            ReadabilityLevel::Warning
        } else {
            ReadabilityLevel::Poor
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityLevel::Good => "good",
            ReadabilityLevel::Warning => "fair",
            ReadabilityLevel::Poor => "hard",
        }
    }
}

/// Estimate the number of syllables in a single word
pub fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stripped = LEADING_Y.replace(&stripped, "");

    match VOWEL_GROUP.find_iter(&stripped).count() {
        0 => 1,
        groups => groups,
    }
}

/// Count sentences, ignoring blank fragments; never less than one
fn sentence_count(text: &str) -> usize {
    SENTENCE_END
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
        .max(1)
}

/// Flesch Reading Ease for `text`, rounded and clamped to 0..=100
///
/// Text without words scores 0.
pub fn readability_score(text: &str) -> u8 {
    let words = word_count(text);
    if words == 0 {
        return 0;
    }

    let sentences = sentence_count(text);
    let syllables: usize = text.split_whitespace().map(syllable_count).sum();

    let words = words as f64;
    let score = 206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables as f64 / words);

    score.round().clamp(0.0, 100.0) as u8
}
