//! Choosing a backend at startup
//!
//! The production backend is used only when a credential is present and mock
//! mode is not forced. The choice is made once; callers share the result.

use std::sync::Arc;

use afrocreate_config::{AiConfig, MockConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ContentProvider;
use crate::api_key::ApiKeyManager;
use crate::error::ProviderError;
use crate::providers::{MockProvider, OpenAiProvider};

/// Provider id the API key is registered under
pub const OPENAI_PROVIDER_ID: &str = "openai";

/// Which backend is answering requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// Template-backed responses
    Mock,
    /// Real AI service
    Production,
}

impl ServiceMode {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ServiceMode::Mock => "Mock",
            ServiceMode::Production => "Production",
        }
    }
}

/// Snapshot of how the AI service is configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiServiceStatus {
    /// Backend that would answer requests
    pub mode: ServiceMode,
    /// Whether a credential was found
    pub has_api_key: bool,
    /// Whether requests reach the real service
    pub is_configured: bool,
}

/// Report the mode the selector would pick, without building a provider
pub fn service_status(config: &AiConfig, keys: &ApiKeyManager) -> AiServiceStatus {
    let has_api_key = keys.has_key(OPENAI_PROVIDER_ID);
    let mode = if has_api_key && !config.force_mock {
        ServiceMode::Production
    } else {
        ServiceMode::Mock
    };

    AiServiceStatus {
        mode,
        has_api_key,
        is_configured: mode == ServiceMode::Production,
    }
}

/// Build the backend that should answer requests
pub fn select_provider(
    ai: &AiConfig,
    mock: &MockConfig,
    keys: &ApiKeyManager,
) -> Result<Arc<dyn ContentProvider>, ProviderError> {
    let status = service_status(ai, keys);

    match status.mode {
        ServiceMode::Production => {
            let api_key = keys.get_key(OPENAI_PROVIDER_ID)?;
            let provider = OpenAiProvider::with_base_url(api_key, ai.base_url.clone())?
                .with_model(ai.model.clone());
            info!(model = %ai.model, "using production AI service");
            Ok(Arc::new(provider))
        }
        ServiceMode::Mock => {
            if status.has_api_key {
                info!("mock mode forced by configuration");
            } else {
                info!(env_var = %ai.api_key_env, "no API key found, using mock AI service");
            }
            Ok(Arc::new(MockProvider::from_config(mock)))
        }
    }
}
