//! Behaviour of the template-backed provider

use std::collections::HashSet;

use afrocreate_providers::{
    templates, ContentProvider, ContentType, GenerationRequest, LatencyWindow, MockProvider,
    ProviderError, TemplateStyle, Tone,
};
use proptest::prelude::*;

fn provider(seed: u64) -> MockProvider {
    MockProvider::seeded(seed)
        .with_latency(LatencyWindow::none())
        .with_year(2026)
}

// ============================================================================
// generate
// ============================================================================

#[tokio::test]
async fn test_blog_fills_every_topic_placeholder() {
    let request = GenerationRequest::new(ContentType::Blog, "Digital Marketing")
        .with_tone(Tone::Professional)
        .with_regional_context(false);
    let content = provider(1).generate(request).await.unwrap();

    assert!(content.body.contains("Digital Marketing"));
    assert!(!content.body.contains("{topic}"));
    assert!(!content.body.contains("{title}"));
    assert_eq!(
        content.title.as_deref(),
        Some("The Complete Guide to Digital Marketing")
    );
    assert!((60..=95).contains(&content.readability_score));
    assert_eq!(
        content.seo_title.as_deref(),
        Some("Digital Marketing | Ultimate Guide 2026")
    );
    assert_eq!(content.suggested_keywords.len(), 8);
    assert_eq!(content.suggested_keywords[0], "digital marketing guide");
    assert!(content.hashtags.is_none());
}

#[tokio::test]
async fn test_regional_social_hashtags_come_from_pool() {
    let request =
        GenerationRequest::new(ContentType::Social, "X").with_tone(Tone::RegionalInformal);
    let content = provider(7).generate(request).await.unwrap();

    let hashtags = content.hashtags.expect("social content carries hashtags");
    assert!(!hashtags.is_empty());
    assert!(hashtags.len() <= 8);
    let unique: HashSet<_> = hashtags.iter().collect();
    assert_eq!(unique.len(), hashtags.len());
    for tag in &hashtags {
        assert!(templates::HASHTAG_POOL.contains(&tag.as_str()), "{tag} not in pool");
    }
}

#[tokio::test]
async fn test_regional_social_uses_regional_bank() {
    let request =
        GenerationRequest::new(ContentType::Social, "Ankara").with_tone(Tone::RegionalInformal);
    let content = provider(3).generate(request).await.unwrap();

    let values = templates::TemplateValues {
        topic: "Ankara",
        title: "The Complete Guide to Ankara",
        year: 2026,
    };
    let candidates: Vec<String> = templates::bank(ContentType::Social, TemplateStyle::Regional)
        .iter()
        .map(|t| templates::fill(t, &values))
        .collect();
    assert!(candidates.contains(&content.body));
}

#[tokio::test]
async fn test_headline_returns_ten_numbered_lines() {
    let content = provider(1)
        .generate(GenerationRequest::new(ContentType::Headline, "Remote Work"))
        .await
        .unwrap();

    let lines: Vec<&str> = content.body.lines().collect();
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{}. ", i + 1)));
        assert!(line.contains("Remote Work"));
    }
    assert!(lines[0].ends_with("in 2026"));
    assert_eq!(content.title.as_deref(), Some("10 Headlines for Your Content"));
}

#[tokio::test]
async fn test_hashtag_body_is_only_tags() {
    let content = provider(5)
        .generate(GenerationRequest::new(ContentType::Hashtag, "Fashion"))
        .await
        .unwrap();

    let hashtags = content.hashtags.clone().unwrap();
    assert_eq!(hashtags.len(), 15);
    assert_eq!(content.body, hashtags.join("  "));
    assert!(content.body.split_whitespace().all(|t| t.starts_with('#')));
    assert_eq!(content.title.as_deref(), Some("Suggested Hashtags"));
}

#[tokio::test]
async fn test_ad_and_email_titles() {
    let ad = provider(1)
        .generate(GenerationRequest::new(ContentType::Ad, "Solar Panels"))
        .await
        .unwrap();
    assert_eq!(ad.title.as_deref(), Some("Solar Panels - Special Offer"));

    let email = provider(1)
        .generate(GenerationRequest::new(ContentType::Email, "Solar Panels"))
        .await
        .unwrap();
    assert_eq!(
        email.title.as_deref(),
        Some("Solar Panels - Your Complete Guide Inside")
    );
}

#[tokio::test]
async fn test_whitespace_topic_is_rejected() {
    let result = provider(1)
        .generate(GenerationRequest::new(ContentType::Social, "   "))
        .await;
    assert_eq!(
        result.unwrap_err(),
        ProviderError::InvalidInput("Topic is required".to_string())
    );
}

#[test]
fn test_style_without_bank_falls_back_to_default() {
    for content_type in ContentType::ALL {
        let regional = templates::bank(content_type, TemplateStyle::Regional);
        let default = templates::bank(content_type, TemplateStyle::Default);
        if default.is_empty() {
            assert!(regional.is_empty());
        } else {
            assert!(!regional.is_empty());
        }
    }
}

// ============================================================================
// improve / suggestions
// ============================================================================

#[tokio::test]
async fn test_improve_keeps_original_and_echoes_instruction() {
    let improved = provider(1)
        .improve("Our shop sells shoes.", "Make it punchier")
        .await
        .unwrap();
    assert!(improved.starts_with("Our shop sells shoes."));
    assert!(improved.contains("[AI Enhanced]"));
    assert!(improved.contains("\"Make it punchier\""));
}

#[tokio::test]
async fn test_improve_never_fails_on_blank_input() {
    let p = provider(1);
    let improved = p.improve("", "Make it shorter").await.unwrap();
    assert!(improved.starts_with("\n\n---\n\n**[AI Enhanced]**"));
    assert!(improved.ends_with("\"Make it shorter\""));

    let improved = p.improve("text", "").await.unwrap();
    assert!(improved.starts_with("text"));
    assert!(improved.ends_with("instruction: \"\""));
}

#[tokio::test]
async fn test_short_text_gets_no_suggestions() {
    let suggestions = provider(1)
        .suggest_continuations("Too short", ContentType::Blog)
        .await
        .unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_suggestions_are_three_distinct_from_list() {
    let suggestions = provider(11)
        .suggest_continuations(
            "Our cooperative helps farmers reach buyers in Lagos.",
            ContentType::Blog,
        )
        .await
        .unwrap();
    assert_eq!(suggestions.len(), 3);
    let unique: HashSet<_> = suggestions.iter().collect();
    assert_eq!(unique.len(), 3);
    for s in &suggestions {
        assert!(templates::CONTINUATION_SUGGESTIONS.contains(&s.as_str()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any seed and any topic keep the score and hashtag count in range
    #[test]
    fn prop_social_output_in_range(seed in any::<u64>(), topic in "[A-Za-z][A-Za-z ]{0,30}") {
        let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
        let content = rt
            .block_on(provider(seed).generate(GenerationRequest::new(ContentType::Social, topic.clone())))
            .unwrap();
        prop_assert!((60..=95).contains(&content.readability_score));
        let hashtags = content.hashtags.unwrap();
        prop_assert_eq!(hashtags.len(), 8);
        prop_assert!(content.body.contains(topic.trim()));
    }
}
