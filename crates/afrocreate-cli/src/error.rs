// CLI error types

use afrocreate_config::ConfigError;
use afrocreate_providers::ProviderError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'afro --help' for usage information.", message)
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(e) => {
                format!("Configuration error: {}\n\nRun 'afro status' to check your configuration.", e)
            }
            CliError::Provider(e) => match e {
                ProviderError::NotConfigured(_) => format!(
                    "{}\n\nSet the key variable or enable mock mode with AFROCREATE__AI__FORCE_MOCK=true.",
                    e.user_message()
                ),
                _ => e.user_message(),
            },
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
