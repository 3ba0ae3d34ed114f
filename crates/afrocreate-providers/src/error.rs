//! Error types for the content providers

use thiserror::Error;

/// Errors that can occur when asking a provider for content
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// No usable credential for the production backend (never includes key details)
    #[error("AI service is not configured: {0}")]
    NotConfigured(String),

    /// Rate limited by the upstream service
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Upstream service failed to produce content
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Request is missing required input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error occurred
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProviderError {
    /// Message suitable for showing to the person who asked for content
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::NotConfigured(_) => {
                "AI service is not configured. Please add your OpenAI API key.".to_string()
            }
            ProviderError::RateLimited(_) => {
                "Rate limit exceeded. Please try again later.".to_string()
            }
            ProviderError::InvalidInput(msg) => msg.clone(),
            ProviderError::GenerationFailed(_)
            | ProviderError::Network(_)
            | ProviderError::Serialization(_) => {
                "Failed to generate content. Please try again.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::GenerationFailed("Request timeout".to_string())
        } else if err.is_connect() {
            ProviderError::Network(err.to_string())
        } else {
            ProviderError::GenerationFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_distinct() {
        let not_configured = ProviderError::NotConfigured("missing key".to_string()).user_message();
        let rate_limited = ProviderError::RateLimited(60).user_message();
        let failed = ProviderError::GenerationFailed("boom".to_string()).user_message();
        let invalid = ProviderError::InvalidInput("Topic is required".to_string()).user_message();

        assert_ne!(not_configured, rate_limited);
        assert_ne!(rate_limited, failed);
        assert_ne!(failed, invalid);
        assert_eq!(invalid, "Topic is required");
    }

    #[test]
    fn test_display_never_leaks_key() {
        let err = ProviderError::NotConfigured("OPENAI_API_KEY is not set".to_string());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        assert!(!err.to_string().contains("sk-"));
    }
}
