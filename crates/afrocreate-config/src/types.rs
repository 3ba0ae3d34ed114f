//! Core configuration types and data structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// AI backend configuration
    pub ai: AiConfig,
    /// Mock backend behaviour
    pub mock: MockConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// AI backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiConfig {
    /// Environment variable holding the API credential
    pub api_key_env: String,
    /// Chat model used by the production backend
    pub model: String,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Use the mock backend even when a credential is present
    pub force_mock: bool,
}

/// Mock backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MockConfig {
    /// Lower bound of the simulated latency in milliseconds
    pub delay_min_ms: u64,
    /// Upper bound of the simulated latency in milliseconds
    pub delay_max_ms: u64,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            force_mock: false,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1000,
            delay_max_ms: 3000,
            seed: None,
        }
    }
}

impl MockConfig {
    /// Mock settings with no simulated latency, for tests and scripted runs
    pub fn instant() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            seed: None,
        }
    }

    /// Simulated latency window
    pub fn delay_window(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.delay_min_ms),
            Duration::from_millis(self.delay_max_ms),
        )
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
