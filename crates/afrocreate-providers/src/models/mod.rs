//! Data models for content generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Kind of content to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Long-form blog post
    #[default]
    Blog,
    /// Short social media post
    Social,
    /// Advertising copy
    Ad,
    /// Marketing email
    Email,
    /// Ten headline variants
    Headline,
    /// A set of hashtags
    Hashtag,
}

impl ContentType {
    /// All content types in display order
    pub const ALL: [ContentType; 6] = [
        ContentType::Blog,
        ContentType::Social,
        ContentType::Ad,
        ContentType::Email,
        ContentType::Headline,
        ContentType::Hashtag,
    ];

    /// Stable identifier used in requests and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Social => "social",
            ContentType::Ad => "ad",
            ContentType::Email => "email",
            ContentType::Headline => "headline",
            ContentType::Hashtag => "hashtag",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Blog => "Blog Post",
            ContentType::Social => "Social Post",
            ContentType::Ad => "Ad Copy",
            ContentType::Email => "Email",
            ContentType::Headline => "Headlines",
            ContentType::Hashtag => "Hashtags",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ProviderError::InvalidInput(format!("Unknown content type: {}", s)))
    }
}

/// Voice of the generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Persuasive,
    Inspiring,
    Humorous,
    /// Nigerian Pidgin English phrasing
    #[serde(alias = "nigerian")]
    RegionalInformal,
}

impl Tone {
    /// All tones in display order
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Persuasive,
        Tone::Inspiring,
        Tone::Humorous,
        Tone::RegionalInformal,
    ];

    /// Stable identifier used in requests and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Persuasive => "persuasive",
            Tone::Inspiring => "inspiring",
            Tone::Humorous => "humorous",
            Tone::RegionalInformal => "regional-informal",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Tone::RegionalInformal => "Nigerian Pidgin",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Persuasive => "Persuasive",
            Tone::Inspiring => "Inspiring",
            Tone::Humorous => "Humorous",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if needle == "nigerian" {
            return Ok(Tone::RegionalInformal);
        }
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ProviderError::InvalidInput(format!("Unknown tone: {}", s)))
    }
}

/// Target length of the generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    /// Stable identifier used in requests and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        }
    }
}

impl fmt::Display for ContentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentLength {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ContentLength::Short),
            "medium" => Ok(ContentLength::Medium),
            "long" => Ok(ContentLength::Long),
            _ => Err(ProviderError::InvalidInput(format!("Unknown length: {}", s))),
        }
    }
}

/// Template family used to phrase the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateStyle {
    /// Neutral international English
    Default,
    /// Locale-specific phrasing
    Regional,
}

/// Parameters for a generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Kind of content to produce
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// What the content is about; must not be empty
    pub topic: String,
    /// Voice of the content
    pub tone: Tone,
    /// Keywords the content should mention
    pub keywords: Vec<String>,
    /// Who the content is written for
    pub target_audience: Option<String>,
    /// Target length
    pub length: ContentLength,
    /// Use locale-specific phrasing
    #[serde(alias = "includeNigerianContext")]
    pub use_regional_context: bool,
    /// Free-form instructions passed to the production backend
    #[serde(alias = "additionalInstructions")]
    pub extra_instructions: Option<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            topic: String::new(),
            tone: Tone::default(),
            keywords: Vec::new(),
            target_audience: None,
            length: ContentLength::default(),
            use_regional_context: true,
            extra_instructions: None,
        }
    }
}

impl GenerationRequest {
    /// Create a request for `topic` with default settings
    pub fn new(content_type: ContentType, topic: impl Into<String>) -> Self {
        Self {
            content_type,
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Set the tone
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the target length
    pub fn with_length(mut self, length: ContentLength) -> Self {
        self.length = length;
        self
    }

    /// Set the keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the target audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    /// Enable or disable regional phrasing
    pub fn with_regional_context(mut self, enabled: bool) -> Self {
        self.use_regional_context = enabled;
        self
    }

    /// Set extra instructions
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.extra_instructions = Some(instructions.into());
        self
    }

    /// Check the request before any backend work happens
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.topic.trim().is_empty() {
            return Err(ProviderError::InvalidInput("Topic is required".to_string()));
        }
        Ok(())
    }

    /// Template family this request resolves to
    pub fn style(&self) -> TemplateStyle {
        if self.use_regional_context || self.tone == Tone::RegionalInformal {
            TemplateStyle::Regional
        } else {
            TemplateStyle::Default
        }
    }
}

/// Content returned by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Generated text, possibly Markdown
    #[serde(alias = "content")]
    pub body: String,
    /// Title for the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Search-engine title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    /// Search-engine description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Keywords to target, most relevant first
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
    /// Hashtags, only for social and hashtag content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// Readability score 0..=100
    pub readability_score: u8,
}

/// Search-engine metadata for a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// Search-engine title
    pub seo_title: String,
    /// Search-engine description
    pub seo_description: String,
    /// Keywords to target
    #[serde(default)]
    pub keywords: Vec<String>,
}
