//! Provider trait and backend selection

use async_trait::async_trait;

use crate::{
    error::ProviderError,
    models::{ContentType, GeneratedContent, GenerationRequest, SeoMetadata},
};

pub mod selector;

pub use selector::{select_provider, service_status, AiServiceStatus, ServiceMode};

/// Texts shorter than this (in characters) get no continuation suggestions
pub const MIN_SUGGESTION_CHARS: usize = 20;

/// Most suggestions returned by `suggest_continuations`
pub const MAX_SUGGESTIONS: usize = 3;

/// Core trait that every content backend implements
///
/// Implementations are chosen once at startup and shared as
/// `Arc<dyn ContentProvider>`.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Get the provider's unique identifier
    fn id(&self) -> &str;

    /// Get the provider's human-readable name
    fn name(&self) -> &str;

    /// Produce content for a request
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedContent, ProviderError>;

    /// Rewrite `content` following `instruction`
    async fn improve(&self, content: &str, instruction: &str) -> Result<String, ProviderError>;

    /// Up to three ways to continue or improve the current draft
    async fn suggest_continuations(
        &self,
        current_text: &str,
        content_type: ContentType,
    ) -> Result<Vec<String>, ProviderError>;

    /// Search-engine title, description and keywords for a piece of content
    async fn generate_seo_metadata(
        &self,
        content: &str,
        title: &str,
    ) -> Result<SeoMetadata, ProviderError>;
}
