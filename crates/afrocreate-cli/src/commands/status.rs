// Report which backend is active

use std::path::PathBuf;

use afrocreate_config::AppConfig;
use afrocreate_providers::{AiServiceStatus, ServiceMode};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Show the AI service status and effective configuration
pub struct StatusCommand {
    status: AiServiceStatus,
    config: AppConfig,
    config_path: PathBuf,
    json: bool,
}

impl StatusCommand {
    pub fn new(status: AiServiceStatus, config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            status,
            config,
            config_path,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn render(&self, style: &OutputStyle) -> String {
        let mode_line = match self.status.mode {
            ServiceMode::Production => style.success(&format!(
                "Production mode: {} via {}",
                self.config.ai.model, self.config.ai.base_url
            )),
            ServiceMode::Mock if self.status.has_api_key => {
                style.warning("Mock mode (forced by configuration)")
            }
            ServiceMode::Mock => style.warning(&format!(
                "Mock mode: set {} to use the real AI service",
                self.config.ai.api_key_env
            )),
        };

        let (min, max) = self.config.mock.delay_window();
        [
            style.header("AI Service Status"),
            mode_line,
            style.key_value("Mode", self.status.mode.label()),
            style.key_value("API key", if self.status.has_api_key { "found" } else { "missing" }),
            style.key_value("Model", &self.config.ai.model),
            style.key_value(
                "Mock latency",
                &format!("{}-{} ms", min.as_millis(), max.as_millis()),
            ),
            style.key_value("Config file", &self.config_path.display().to_string()),
        ]
        .join("\n")
    }
}

#[async_trait::async_trait]
impl Command for StatusCommand {
    async fn execute(&self) -> CliResult<()> {
        if self.json {
            let json = serde_json::to_string_pretty(&self.status)
                .map_err(|e| CliError::Internal(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", self.render(&OutputStyle::default()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(mode: ServiceMode, has_api_key: bool) -> StatusCommand {
        StatusCommand::new(
            AiServiceStatus {
                mode,
                has_api_key,
                is_configured: mode == ServiceMode::Production,
            },
            AppConfig::default(),
            PathBuf::from("/tmp/afrocreate/config.toml"),
        )
    }

    #[test]
    fn test_mock_without_key_names_the_variable() {
        let text = command(ServiceMode::Mock, false).render(&OutputStyle::plain());
        assert!(text.contains("set OPENAI_API_KEY"));
        assert!(text.contains("  API key: missing"));
        assert!(text.contains("  Mock latency: 1000-3000 ms"));
    }

    #[test]
    fn test_forced_mock() {
        let text = command(ServiceMode::Mock, true).render(&OutputStyle::plain());
        assert!(text.contains("forced by configuration"));
    }

    #[test]
    fn test_production() {
        let text = command(ServiceMode::Production, true).render(&OutputStyle::plain());
        assert!(text.contains("Production mode: gpt-3.5-turbo"));
        assert!(text.contains("  Mode: Production"));
    }
}
