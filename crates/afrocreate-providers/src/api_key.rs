//! API key management for the production backend
//!
//! Keys come either from an explicit `store_key` call or from the environment
//! variable registered for a provider. Error messages name the variable,
//! never the key.

use std::collections::HashMap;

use crate::error::ProviderError;

/// Manages API keys for providers
#[derive(Default)]
pub struct ApiKeyManager {
    /// Cached API keys (provider_id -> api_key)
    keys: HashMap<String, String>,
    /// Environment variable per provider (provider_id -> variable name)
    env_vars: HashMap<String, String>,
}

impl ApiKeyManager {
    /// Create a new API key manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager that reads `provider_id`'s key from `env_var`
    pub fn from_env(provider_id: impl Into<String>, env_var: impl Into<String>) -> Self {
        let mut manager = Self::new();
        manager.register_env_var(provider_id, env_var);
        manager
    }

    /// Register the environment variable that holds a provider's key
    pub fn register_env_var(&mut self, provider_id: impl Into<String>, env_var: impl Into<String>) {
        self.env_vars.insert(provider_id.into(), env_var.into());
    }

    /// Store an API key for a provider
    pub fn store_key(&mut self, provider_id: impl Into<String>, api_key: impl Into<String>) {
        self.keys.insert(provider_id.into(), api_key.into());
    }

    /// Get an API key for a provider
    ///
    /// The cached key wins over the environment. Blank values count as missing.
    pub fn get_key(&self, provider_id: &str) -> Result<String, ProviderError> {
        if let Some(key) = self.keys.get(provider_id).filter(|k| !k.trim().is_empty()) {
            return Ok(key.clone());
        }

        if let Some(env_var) = self.env_vars.get(provider_id) {
            return match std::env::var(env_var) {
                Ok(key) if !key.trim().is_empty() => Ok(key),
                _ => Err(ProviderError::NotConfigured(format!("{} is not set", env_var))),
            };
        }

        Err(ProviderError::NotConfigured(format!(
            "no API key source for provider '{}'",
            provider_id
        )))
    }

    /// Check if an API key is available for a provider
    pub fn has_key(&self, provider_id: &str) -> bool {
        self.get_key(provider_id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get_key() {
        let mut manager = ApiKeyManager::new();
        manager.store_key("openai", "sk-test-123");
        assert_eq!(manager.get_key("openai").unwrap(), "sk-test-123");
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        let manager = ApiKeyManager::new();
        assert!(matches!(
            manager.get_key("openai"),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_unset_env_var_is_named_in_error() {
        let manager = ApiKeyManager::from_env("openai", "AFROCREATE_TEST_UNSET_KEY_VAR");
        let err = manager.get_key("openai").unwrap_err();
        assert!(err.to_string().contains("AFROCREATE_TEST_UNSET_KEY_VAR"));
        assert!(!manager.has_key("openai"));
    }

    #[test]
    fn test_blank_cached_key_is_ignored() {
        let mut manager = ApiKeyManager::new();
        manager.store_key("openai", "   ");
        assert!(!manager.has_key("openai"));
    }
}
