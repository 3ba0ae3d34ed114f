//! Mock provider implementation
//!
//! Fills template banks instead of calling a model. All randomness (template
//! variant, hashtag sample, readability score, latency) comes from one
//! injected RNG, so a seeded provider always produces the same output.
//!
//! The readability score is drawn from 60..=95 and is not computed from the
//! body. That mirrors what the UI gets from the real service during
//! development and is intentional.

use afrocreate_config::MockConfig;
use afrocreate_metrics::{extract_keywords, truncate};
use async_trait::async_trait;
use chrono::Datelike;
use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::latency::{self, LatencyWindow};
use crate::models::{ContentType, GeneratedContent, GenerationRequest, SeoMetadata, TemplateStyle};
use crate::provider::{ContentProvider, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};
use crate::templates::{self, TemplateValues};

/// Hashtags attached to a social post
pub const SOCIAL_HASHTAG_COUNT: usize = 8;
/// Hashtags produced for a hashtag request
pub const HASHTAG_SET_COUNT: usize = 15;
/// Most keywords returned with generated content or SEO metadata
pub const MAX_KEYWORDS: usize = 8;
/// Length of a mock SEO description before the ellipsis
pub const SEO_DESCRIPTION_CHARS: usize = 155;
/// Fabricated readability scores fall in this range
pub const MOCK_READABILITY_RANGE: std::ops::RangeInclusive<u8> = 60..=95;

/// Template-backed provider used when no AI credential is configured
pub struct MockProvider {
    rng: Mutex<Box<dyn RngCore + Send>>,
    latency: LatencyWindow,
    year: Option<i32>,
}

impl MockProvider {
    /// Create a mock provider seeded from OS entropy with the default latency window
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a mock provider driven by a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a mock provider driven by the given random source
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            rng: Mutex::new(Box::new(rng)),
            latency: LatencyWindow::default(),
            year: None,
        }
    }

    /// Entropy-seeded provider that answers without simulated latency
    pub fn instant() -> Self {
        Self::new().with_latency(LatencyWindow::none())
    }

    /// Build from configuration: latency window and optional seed
    pub fn from_config(config: &MockConfig) -> Self {
        let provider = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        };
        provider.with_latency(LatencyWindow::from_millis(
            config.delay_min_ms,
            config.delay_max_ms,
        ))
    }

    /// Set the simulated latency window
    pub fn with_latency(mut self, latency: LatencyWindow) -> Self {
        self.latency = latency;
        self
    }

    /// Pin the year used in SEO titles and headlines
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Simulated latency window
    pub fn latency(&self) -> LatencyWindow {
        self.latency
    }

    fn current_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    fn with_rng_locked<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        let mut guard = self.rng.lock();
        f(&mut **guard)
    }

    async fn wait(&self) {
        let delay = self.with_rng_locked(|rng| self.latency.sample(rng));
        debug!(delay_ms = delay.as_millis() as u64, "simulating upstream latency");
        latency::simulate(delay).await;
    }

    /// Build the full response for a validated request
    fn assemble(&self, request: &GenerationRequest, rng: &mut dyn RngCore) -> GeneratedContent {
        let style = request.style();
        let topic = request.topic.trim();
        let guide = templates::guide_title(topic);
        let year = self.current_year();
        let values = TemplateValues {
            topic,
            title: &guide,
            year,
        };

        let mut title = guide.clone();
        let mut hashtags = Vec::new();

        let body = match request.content_type {
            ContentType::Blog => pick_and_fill(request.content_type, style, &values, rng),
            ContentType::Social => {
                let body = pick_and_fill(request.content_type, style, &values, rng);
                hashtags = sample_hashtags(SOCIAL_HASHTAG_COUNT, rng);
                body
            }
            ContentType::Ad => {
                title = format!("{} - Special Offer", topic);
                pick_and_fill(request.content_type, style, &values, rng)
            }
            ContentType::Email => {
                title = format!("{} - Your Complete Guide Inside", topic);
                pick_and_fill(request.content_type, style, &values, rng)
            }
            ContentType::Headline => {
                title = "10 Headlines for Your Content".to_string();
                templates::HEADLINES
                    .iter()
                    .enumerate()
                    .map(|(i, headline)| format!("{}. {}", i + 1, templates::fill(headline, &values)))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            ContentType::Hashtag => {
                title = "Suggested Hashtags".to_string();
                hashtags = sample_hashtags(HASHTAG_SET_COUNT, rng);
                hashtags.join("  ")
            }
        };

        GeneratedContent {
            body,
            title: Some(title),
            seo_title: Some(format!("{} | Ultimate Guide {}", topic, year)),
            seo_description: Some(format!(
                "Discover everything about {}. Learn proven strategies, tips, and best practices to achieve your goals.",
                topic
            )),
            suggested_keywords: keyword_suggestions(topic),
            hashtags: if hashtags.is_empty() { None } else { Some(hashtags) },
            readability_score: rng.gen_range(MOCK_READABILITY_RANGE),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_and_fill(
    content_type: ContentType,
    style: TemplateStyle,
    values: &TemplateValues<'_>,
    rng: &mut dyn RngCore,
) -> String {
    templates::bank(content_type, style)
        .choose(rng)
        .map(|template| templates::fill(template, values))
        .unwrap_or_default()
}

fn sample_hashtags(count: usize, rng: &mut dyn RngCore) -> Vec<String> {
    templates::HASHTAG_POOL
        .choose_multiple(rng, count)
        .map(|tag| tag.to_string())
        .collect()
}

/// Keyword patterns filled with `subject`, deduplicated and capped
pub fn keyword_suggestions(subject: &str) -> Vec<String> {
    let subject = subject.trim().to_lowercase();
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for pattern in templates::KEYWORD_PATTERNS {
        let keyword = pattern.replace(templates::TOPIC_PLACEHOLDER, &subject);
        if !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }
    keywords
}

#[async_trait]
impl ContentProvider for MockProvider {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock AI"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedContent, ProviderError> {
        request.validate()?;

        debug!(
            content_type = %request.content_type,
            topic = %request.topic,
            tone = %request.tone,
            regional = request.use_regional_context,
            audience = request.target_audience.as_deref().unwrap_or("General"),
            length = %request.length,
            keywords = ?request.keywords,
            instructions = request.extra_instructions.as_deref().unwrap_or("None"),
            "mock generation request received"
        );

        let content = self.with_rng_locked(|rng| self.assemble(&request, rng));
        self.wait().await;

        info!(
            content_type = %request.content_type,
            chars = content.body.chars().count(),
            readability = content.readability_score,
            "mock content generated"
        );
        Ok(content)
    }

    async fn improve(&self, content: &str, instruction: &str) -> Result<String, ProviderError> {
        debug!(instruction, "mock improvement requested");
        self.wait().await;

        Ok(format!(
            "{}\n\n---\n\n**[AI Enhanced]** This content has been reviewed and optimized based on your instruction: \"{}\"",
            content, instruction
        ))
    }

    async fn suggest_continuations(
        &self,
        current_text: &str,
        content_type: ContentType,
    ) -> Result<Vec<String>, ProviderError> {
        if current_text.chars().count() < MIN_SUGGESTION_CHARS {
            return Ok(Vec::new());
        }

        debug!(%content_type, chars = current_text.chars().count(), "mock suggestions requested");

        let suggestions = self.with_rng_locked(|rng| {
            templates::CONTINUATION_SUGGESTIONS
                .choose_multiple(rng, MAX_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        });
        self.wait().await;
        Ok(suggestions)
    }

    async fn generate_seo_metadata(
        &self,
        content: &str,
        title: &str,
    ) -> Result<SeoMetadata, ProviderError> {
        debug!(title, "mock SEO metadata requested");
        self.wait().await;

        let mut keywords = extract_keywords(content, MAX_KEYWORDS);
        if keywords.is_empty() {
            keywords = keyword_suggestions(title);
        }

        Ok(SeoMetadata {
            seo_title: format!("{} | Complete Guide {}", title.trim(), self.current_year()),
            seo_description: truncate(content.trim(), SEO_DESCRIPTION_CHARS),
            keywords,
        })
    }
}
