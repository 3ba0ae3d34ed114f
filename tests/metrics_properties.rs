//! Workspace-level properties tying the metrics engine to generated drafts

use afrocreate_metrics::{extract_keywords, readability_score, reading_time, word_count};
use afrocreate_providers::{
    ContentProvider, ContentType, GenerationRequest, LatencyWindow, MockProvider,
};
use proptest::prelude::*;

fn content_type_strategy() -> impl Strategy<Value = ContentType> {
    prop::sample::select(ContentType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Metrics over any mock draft stay within their documented ranges
    #[test]
    fn prop_metrics_bounded_for_generated_drafts(
        seed in any::<u64>(),
        content_type in content_type_strategy(),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
        let provider = MockProvider::seeded(seed).with_latency(LatencyWindow::none());
        let content = rt
            .block_on(provider.generate(GenerationRequest::new(content_type, "Mobile Money")))
            .unwrap();

        let words = word_count(&content.body);
        prop_assert!(words > 0);
        prop_assert!(reading_time(&content.body) >= 1);
        prop_assert!(readability_score(&content.body) <= 100);
        prop_assert!(extract_keywords(&content.body, 5).len() <= 5);
    }
}
