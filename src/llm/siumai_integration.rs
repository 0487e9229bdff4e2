//! Siumai-backed completion client.
//!
//! Wraps the siumai library behind the [`CompletionClient`] capability,
//! supporting the `OpenAI`, Anthropic, and Ollama providers.

use crate::{
    error::{AgentError, Result},
    llm::{CompletionClient, enforce_stop},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use siumai::prelude::*;

/// Configuration for the completion client.
///
/// Credentials are explicit: the caller supplies the API key (typically read
/// from the process environment at startup) rather than the client reaching
/// into ambient state itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Provider name (openai, anthropic, ollama)
    pub provider: String,
    /// Model name
    pub model: String,
    /// API key, where the provider requires one
    pub api_key: Option<String>,
    /// Base URL, for providers reached by address (ollama)
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: Some(1024),
        }
    }
}

impl CompletionConfig {
    /// Create a new configuration
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens to generate
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Completion client backed by a siumai provider client.
pub struct SiumaiCompletionClient {
    /// The underlying siumai client
    client: Box<dyn LlmClient>,
    /// Client configuration
    config: CompletionConfig,
}

impl std::fmt::Debug for SiumaiCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiumaiCompletionClient")
            .field("config", &self.config)
            .field("client", &"<LlmClient>")
            .finish()
    }
}

impl SiumaiCompletionClient {
    /// Build a client from configuration
    pub async fn from_config(config: CompletionConfig) -> Result<Self> {
        let client: Box<dyn LlmClient> = match config.provider.as_str() {
            "openai" => {
                let api_key = config.api_key.clone().ok_or_else(|| {
                    AgentError::configuration("api_key is required for the openai provider")
                })?;

                let mut builder = LlmBuilder::new()
                    .openai()
                    .api_key(api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    AgentError::completion(format!("Failed to build OpenAI client: {e}"))
                })?;

                Box::new(client)
            }
            "anthropic" => {
                let api_key = config.api_key.clone().ok_or_else(|| {
                    AgentError::configuration("api_key is required for the anthropic provider")
                })?;

                let mut builder = LlmBuilder::new()
                    .anthropic()
                    .api_key(api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    AgentError::completion(format!("Failed to build Anthropic client: {e}"))
                })?;

                Box::new(client)
            }
            "ollama" => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:11434".to_string());

                let mut builder = LlmBuilder::new()
                    .ollama()
                    .base_url(base_url)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    AgentError::completion(format!("Failed to build Ollama client: {e}"))
                })?;

                Box::new(client)
            }
            other => {
                return Err(AgentError::configuration(format!(
                    "Unsupported provider: {other}. Use 'openai', 'anthropic', or 'ollama'"
                )));
            }
        };

        Ok(Self { client, config })
    }

    /// Get the client configuration
    #[must_use]
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for SiumaiCompletionClient {
    async fn complete(&self, prompt: &str, stop: &[String]) -> Result<String> {
        let messages = vec![user!(prompt.to_string())];

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| AgentError::completion(format!("Chat request failed: {e}")))?;

        let text = response
            .content_text()
            .ok_or_else(|| AgentError::completion("No text content in response"))?;

        // The chat path carries no per-request stop parameter, so stop
        // sequences are enforced on the reply text here.
        Ok(enforce_stop(text, stop).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_temperature_zero() {
        let config = CompletionConfig::new("openai", "gpt-4o-mini");
        assert_eq!(config.temperature, 0.0);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_builder_chain() {
        let config = CompletionConfig::new("ollama", "llama3.2")
            .with_base_url("http://localhost:11434")
            .with_temperature(0.0)
            .with_max_tokens(512);

        assert_eq!(config.provider, "ollama");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(config.max_tokens, Some(512));
    }

    #[tokio::test]
    async fn test_openai_without_api_key_is_rejected() {
        let err = SiumaiCompletionClient::from_config(CompletionConfig::new("openai", "gpt-4o-mini"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_unknown_provider_is_rejected() {
        let err = SiumaiCompletionClient::from_config(CompletionConfig::new("mystery", "model"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Configuration { .. }));
    }
}
