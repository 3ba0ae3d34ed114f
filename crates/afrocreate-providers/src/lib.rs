//! AfroCreate content providers
//!
//! A single `ContentProvider` trait with two backends: a template-driven mock
//! used when no credential is configured, and an OpenAI chat-completions
//! client. `select_provider` picks one at startup.

pub mod api_key;
pub mod error;
pub mod latency;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod templates;

// Re-export commonly used types
pub use api_key::ApiKeyManager;
pub use error::ProviderError;
pub use latency::LatencyWindow;
pub use models::{
    ContentLength, ContentType, GeneratedContent, GenerationRequest, SeoMetadata, TemplateStyle,
    Tone,
};
pub use provider::{
    select_provider, selector::OPENAI_PROVIDER_ID, service_status, AiServiceStatus,
    ContentProvider, ServiceMode, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS,
};
pub use providers::{MockProvider, OpenAiProvider};
