//! AfroCreate text metrics
//!
//! Pure functions that score drafted content while it is being edited:
//! word count, reading time, Flesch Reading Ease and naive keyword extraction.
//! Every function is total over its input; empty text yields zero or empty results.

pub mod keywords;
pub mod readability;
pub mod text;

pub use keywords::{extract_keywords, is_stop_word, DEFAULT_KEYWORD_LIMIT};
pub use readability::{readability_score, syllable_count, ReadabilityLevel};
pub use text::{
    reading_time, reading_time_with_rate, slugify, truncate, word_count, WORDS_PER_MINUTE,
};

use serde::{Deserialize, Serialize};

/// Live metrics shown next to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// Number of whitespace separated words
    pub word_count: usize,
    /// Estimated reading time in whole minutes
    pub reading_time_minutes: usize,
    /// Flesch Reading Ease, clamped to 0..=100
    pub readability_score: u8,
}

impl TextMetrics {
    /// Compute every metric for the given text
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            reading_time_minutes: reading_time(text),
            readability_score: readability_score(text),
        }
    }

    /// Badge level for the readability score
    pub fn readability_level(&self) -> ReadabilityLevel {
        ReadabilityLevel::from_score(self.readability_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_for_empty_text() {
        let metrics = TextMetrics::from_text("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.reading_time_minutes, 0);
        assert_eq!(metrics.readability_score, 0);
        assert_eq!(metrics.readability_level(), ReadabilityLevel::Poor);
    }

    #[test]
    fn test_metrics_for_simple_text() {
        let metrics = TextMetrics::from_text("The cat sat on the mat. It was a sunny day.");
        assert_eq!(metrics.word_count, 11);
        assert_eq!(metrics.reading_time_minutes, 1);
        assert!(metrics.readability_score >= 70);
        assert_eq!(metrics.readability_level(), ReadabilityLevel::Good);
    }

    #[test]
    fn test_metrics_serialize_camel_case() {
        let metrics = TextMetrics::from_text("hello world");
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["wordCount"], 2);
        assert_eq!(json["readingTimeMinutes"], 1);
        assert!(json.get("readabilityScore").is_some());
    }
}
