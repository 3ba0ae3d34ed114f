//! AfroCreate configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `AFROCREATE__SECTION__KEY` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AiConfig, AppConfig, ConfigManager as ConfigManagerTrait, LoggingConfig, MockConfig,
};
