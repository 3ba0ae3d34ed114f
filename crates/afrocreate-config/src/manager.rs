//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigManager as ConfigManagerTrait},
};

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "AFROCREATE".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "AFROCREATE".to_string(),
        }
    }

    /// Override the environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the TOML file this manager reads and writes
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("afrocreate")
            .join("config.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        debug!(path = %self.config_path.display(), prefix = %self.env_prefix, "loading configuration");

        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.mock.delay_min_ms > config.mock.delay_max_ms {
            return Err(ConfigError::Validation(format!(
                "mock.delay_min_ms ({}) must not exceed mock.delay_max_ms ({})",
                config.mock.delay_min_ms, config.mock.delay_max_ms
            )));
        }
        if config.ai.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ai.model must not be empty".to_string(),
            ));
        }
        if !config.ai.base_url.starts_with("http://") && !config.ai.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "ai.base_url must be an http(s) URL, got '{}'",
                config.ai.base_url
            )));
        }
        if config.ai.api_key_env.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ai.api_key_env must name an environment variable".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                config.logging.level
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
