//! Property-based tests for the text metrics engine
//!
//! These tests verify properties that should hold for any input text.

use afrocreate_metrics::{
    extract_keywords, is_stop_word, readability_score, reading_time, word_count, TextMetrics,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_readability_is_bounded(text in "\\PC{0,400}") {
        let score = readability_score(&text);
        prop_assert!(score <= 100);
    }

    #[test]
    fn prop_reading_time_at_least_one_minute_for_words(text in "[a-z]{1,8}( [a-z]{1,8}){0,300}") {
        prop_assert!(word_count(&text) > 0);
        prop_assert!(reading_time(&text) >= 1);
    }

    #[test]
    fn prop_reading_time_zero_iff_no_words(text in "\\s{0,20}") {
        prop_assert_eq!(word_count(&text), 0);
        prop_assert_eq!(reading_time(&text), 0);
    }

    #[test]
    fn prop_keywords_respect_contract(text in "\\PC{0,400}", limit in 0usize..20) {
        let keywords = extract_keywords(&text, limit);
        prop_assert!(keywords.len() <= limit);

        let mut seen = std::collections::HashSet::new();
        for keyword in &keywords {
            prop_assert!(keyword.chars().count() > 3);
            prop_assert!(!is_stop_word(keyword));
            prop_assert!(seen.insert(keyword.clone()), "duplicate keyword {}", keyword);
        }
    }

    #[test]
    fn prop_metrics_are_pure(text in "\\PC{0,300}") {
        prop_assert_eq!(word_count(&text), word_count(&text));
        prop_assert_eq!(reading_time(&text), reading_time(&text));
        prop_assert_eq!(readability_score(&text), readability_score(&text));
        prop_assert_eq!(extract_keywords(&text, 5), extract_keywords(&text, 5));
        prop_assert_eq!(TextMetrics::from_text(&text), TextMetrics::from_text(&text));
    }
}

#[test]
fn test_word_count_examples() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("a b  c"), 3);
}

#[test]
fn test_readability_of_empty_text_is_defined() {
    assert_eq!(readability_score(""), 0);
}

#[test]
fn test_keywords_from_editor_draft() {
    let draft = "Small business owners in Lagos need content. Content drives growth, \
                 and growth drives revenue for every small business.";
    let keywords = extract_keywords(draft, 4);
    assert_eq!(keywords, vec!["small", "business", "content", "drives"]);
}
