// Shared state every command runs against

use std::path::PathBuf;
use std::sync::Arc;

use afrocreate_config::{AppConfig, ConfigManager, ConfigManagerTrait};
use afrocreate_providers::{
    select_provider, service_status, AiServiceStatus, ApiKeyManager, ContentProvider,
    OPENAI_PROVIDER_ID,
};
use tracing::debug;

use crate::error::CliResult;

/// Loaded configuration plus the backend chosen for this run
pub struct AppContext {
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub status: AiServiceStatus,
    pub provider: Arc<dyn ContentProvider>,
}

impl AppContext {
    /// Load and validate configuration from `config_path` or the default location
    pub fn load_config(config_path: Option<PathBuf>) -> CliResult<(AppConfig, PathBuf)> {
        let mut manager = match config_path {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new(),
        };
        let config = manager.load_config()?;
        manager.validate_config(&config)?;
        Ok((config, manager.config_path().to_path_buf()))
    }

    /// Build from an already loaded configuration
    pub fn from_config(config: AppConfig, config_path: PathBuf) -> CliResult<Self> {
        let keys = ApiKeyManager::from_env(OPENAI_PROVIDER_ID, config.ai.api_key_env.clone());
        let status = service_status(&config.ai, &keys);
        let provider = select_provider(&config.ai, &config.mock, &keys)?;
        debug!(provider = provider.id(), "context ready");

        Ok(Self {
            config,
            config_path,
            status,
            provider,
        })
    }
}
