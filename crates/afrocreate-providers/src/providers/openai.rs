//! OpenAI provider implementation
//!
//! Talks to a chat-completions endpoint and asks for JSON object responses
//! for everything except `improve`, which returns plain text.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::error::ProviderError;
use crate::models::{ContentType, GeneratedContent, GenerationRequest, SeoMetadata};
use crate::prompt;
use crate::provider::{ContentProvider, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS};

/// Default chat-completions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Readability reported when the model omits one
pub const DEFAULT_READABILITY: u8 = 70;
/// Retry hint used when a 429 carries no Retry-After header
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Trailing characters of a draft sent for continuation suggestions
const SUGGESTION_CONTEXT_CHARS: usize = 500;
/// Leading characters of content sent for SEO metadata
const SEO_CONTEXT_CHARS: usize = 2000;
/// Fallback SEO title length when the model call fails
const SEO_FALLBACK_TITLE_CHARS: usize = 60;
/// Fallback SEO description length when the model call fails
const SEO_FALLBACK_DESCRIPTION_CHARS: usize = 160;

/// Sampling settings for one kind of chat call
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

impl ChatOptions {
    pub(crate) const GENERATE: Self = Self {
        temperature: 0.7,
        max_tokens: 4000,
        json_mode: true,
    };
    pub(crate) const IMPROVE: Self = Self {
        temperature: 0.6,
        max_tokens: 4000,
        json_mode: false,
    };
    pub(crate) const SUGGEST: Self = Self {
        temperature: 0.8,
        max_tokens: 300,
        json_mode: true,
    };
    pub(crate) const SEO: Self = Self {
        temperature: 0.5,
        max_tokens: 300,
        json_mode: true,
    };
}

/// OpenAI provider implementation
pub struct OpenAiProvider {
    api_key: String,
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider instance
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with a custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "OpenAI API key is required".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            client: Arc::new(Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Use a different chat model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Chat model in use
    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    fn chat_request(&self, messages: Vec<OpenAiMessage>, options: ChatOptions) -> OpenAiChatRequest {
        OpenAiChatRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(options.temperature),
            max_tokens: Some(options.max_tokens),
            response_format: options.json_mode.then(|| ResponseFormat {
                kind: "json_object".to_string(),
            }),
        }
    }

    /// Send one chat-completions call and return the first choice's text
    async fn chat(
        &self,
        messages: Vec<OpenAiMessage>,
        options: ChatOptions,
    ) -> Result<String, ProviderError> {
        let request = self.chat_request(messages, options);

        debug!(
            model = %self.model,
            json_mode = options.json_mode,
            max_tokens = options.max_tokens,
            "sending chat request to OpenAI"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", self.get_auth_header())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                ProviderError::from(e)
            })?;

        let response = check_status(response).await?;
        let body: OpenAiChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Serialization(e.to_string()))?;

        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .map(|m| m.content)
            .unwrap_or_default())
    }
}

/// Metadata used when the model cannot produce SEO fields
fn fallback_seo(content: &str, title: &str) -> SeoMetadata {
    SeoMetadata {
        seo_title: title.chars().take(SEO_FALLBACK_TITLE_CHARS).collect(),
        seo_description: content.chars().take(SEO_FALLBACK_DESCRIPTION_CHARS).collect(),
        keywords: Vec::new(),
    }
}

/// Last `max_chars` characters of `text`
fn tail_chars(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    match text.char_indices().nth(count - max_chars) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Map non-success statuses to provider errors
async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let error_text = response.text().await.unwrap_or_default();
    error!("OpenAI API error ({}): {}", status, error_text);

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ProviderError::NotConfigured("OpenAI rejected the API key".to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            ProviderError::RateLimited(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS))
        }
        _ => ProviderError::GenerationFailed(format!("OpenAI API error: {}", status)),
    })
}

/// Turn the model's JSON answer into generated content
pub(crate) fn parse_generated(raw: &str) -> Result<GeneratedContent, ProviderError> {
    let parsed: RawGenerated = serde_json::from_str(raw)?;
    let score = parsed
        .readability_score
        .map(|s| s.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(DEFAULT_READABILITY);

    Ok(GeneratedContent {
        body: parsed.content,
        title: parsed.title,
        seo_title: parsed.seo_title,
        seo_description: parsed.seo_description,
        suggested_keywords: parsed.suggested_keywords,
        hashtags: parsed.hashtags.filter(|h| !h.is_empty()),
        readability_score: score,
    })
}

#[async_trait]
impl ContentProvider for OpenAiProvider {
    fn id(&self) -> &str {
        "openai"
    }

    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedContent, ProviderError> {
        request.validate()?;

        let raw = self
            .chat(
                vec![
                    OpenAiMessage::system(prompt::build_system_prompt(&request)),
                    OpenAiMessage::user(prompt::build_content_prompt(&request)),
                ],
                ChatOptions::GENERATE,
            )
            .await?;

        if raw.trim().is_empty() {
            return Err(ProviderError::GenerationFailed(
                "No content in response".to_string(),
            ));
        }
        parse_generated(&raw)
    }

    async fn improve(&self, content: &str, instruction: &str) -> Result<String, ProviderError> {
        if content.trim().is_empty() || instruction.trim().is_empty() {
            return Err(ProviderError::InvalidInput(
                "Content and instruction are required".to_string(),
            ));
        }

        let improved = self
            .chat(
                vec![
                    OpenAiMessage::system(
                        "You are an expert editor. Improve the given content based on the instruction. Return only the improved content, no explanations.",
                    ),
                    OpenAiMessage::user(format!(
                        "Instruction: {}\n\nContent to improve:\n{}",
                        instruction, content
                    )),
                ],
                ChatOptions::IMPROVE,
            )
            .await?;

        if improved.trim().is_empty() {
            warn!("OpenAI returned an empty improvement; keeping the original");
            return Ok(content.to_string());
        }
        Ok(improved)
    }

    async fn suggest_continuations(
        &self,
        current_text: &str,
        content_type: ContentType,
    ) -> Result<Vec<String>, ProviderError> {
        if current_text.chars().count() < MIN_SUGGESTION_CHARS {
            return Ok(Vec::new());
        }

        let raw = self
            .chat(
                vec![
                    OpenAiMessage::system(format!(
                        "You are a writing assistant. Suggest 3 brief ways to continue or improve this {}. Return as JSON: {{ \"suggestions\": [\"...\", \"...\", \"...\"] }}",
                        content_type.label().to_lowercase()
                    )),
                    OpenAiMessage::user(format!(
                        "Current text:\n\n{}",
                        tail_chars(current_text, SUGGESTION_CONTEXT_CHARS)
                    )),
                ],
                ChatOptions::SUGGEST,
            )
            .await?;

        let parsed: Suggestions = serde_json::from_str(&raw)?;
        Ok(parsed.suggestions.into_iter().take(MAX_SUGGESTIONS).collect())
    }

    async fn generate_seo_metadata(
        &self,
        content: &str,
        title: &str,
    ) -> Result<SeoMetadata, ProviderError> {
        if content.trim().is_empty() || title.trim().is_empty() {
            return Err(ProviderError::InvalidInput(
                "Content and title are required".to_string(),
            ));
        }

        let excerpt: String = content.chars().take(SEO_CONTEXT_CHARS).collect();
        let result = self
            .chat(
                vec![
                    OpenAiMessage::system(
                        "You are an SEO expert. Generate optimized metadata. Return as JSON: { \"seoTitle\": \"...\", \"seoDescription\": \"...\", \"keywords\": [...] }",
                    ),
                    OpenAiMessage::user(format!("Title: {}\n\nContent: {}", title, excerpt)),
                ],
                ChatOptions::SEO,
            )
            .await
            .and_then(|raw| serde_json::from_str::<SeoMetadata>(&raw).map_err(ProviderError::from));

        match result {
            Ok(metadata) => Ok(metadata),
            Err(e @ (ProviderError::NotConfigured(_) | ProviderError::RateLimited(_))) => Err(e),
            Err(e) => {
                warn!("OpenAI SEO generation failed, using truncated title and content: {}", e);
                Ok(fallback_seo(content, title))
            }
        }
    }
}

/// OpenAI API request format
#[derive(Debug, Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

/// OpenAI API message format
#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl OpenAiMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

/// OpenAI API choice format
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: Option<OpenAiMessage>,
}

/// Shape the model is asked to return for `generate`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerated {
    #[serde(default)]
    content: String,
    title: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    #[serde(default)]
    suggested_keywords: Vec<String>,
    hashtags: Option<Vec<String>>,
    readability_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Suggestions {
    #[serde(default)]
    suggestions: Vec<String>,
}
