//! Chat Provider Abstraction
//!
//! Defines the ChatProvider trait for the single chat-completion round trip
//! the generation pipeline performs. The provider is constructed once from
//! configuration and injected, so tests can substitute a stub.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::types::Result;

/// Shared provider type for concurrent access across handlers.
pub type SharedProvider = Arc<dyn ChatProvider + Send + Sync>;

/// Chat-completion provider trait
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Issue one request-response round trip and return the raw assistant
    /// text. No retries; failures map to `FaqError::LlmApi`.
    async fn chat(&self, system: &str, user: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create a shared provider from configuration.
///
/// Returns `None` when no API key is available from config or the
/// OPENAI_API_KEY env var: the pipeline then serves fallback content, so the
/// system stays usable with zero external dependencies.
pub fn create_provider(config: &LlmConfig) -> Result<Option<SharedProvider>> {
    let api_key = config
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .filter(|key| !key.trim().is_empty());

    match api_key {
        Some(key) => Ok(Some(Arc::new(OpenAiProvider::new(config, key)?))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_with_explicit_key() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            ..LlmConfig::default()
        };
        let provider = create_provider(&config).unwrap();
        assert!(provider.is_some());
        assert_eq!(provider.unwrap().name(), "openai");
    }

    #[test]
    fn test_create_provider_without_any_key() {
        // SAFETY: This test runs in isolation
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
        let config = LlmConfig {
            api_key: None,
            ..LlmConfig::default()
        };
        assert!(create_provider(&config).unwrap().is_none());
    }

    #[test]
    fn test_blank_configured_key_is_absent() {
        // SAFETY: This test runs in isolation
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
        let config = LlmConfig {
            api_key: Some("   ".to_string()),
            ..LlmConfig::default()
        };
        assert!(create_provider(&config).unwrap().is_none());
    }
}
