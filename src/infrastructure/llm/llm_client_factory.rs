use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::infrastructure::llm::{
    AuthHeader, DEFAULT_OPENAI_BASE_URL, GeminiClient, MockLlmClient, OpenAiClient,
};
use crate::presentation::config::{LlmProvider, LlmSettings};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: the {0:?} provider requires a credential")]
    MissingApiKey(LlmProvider),
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        let provider = settings.provider;
        let require_key = || {
            Some(settings.api_key.clone())
                .filter(|k| !k.is_empty())
                .ok_or(LlmClientFactoryError::MissingApiKey(provider))
        };

        tracing::info!(provider = ?provider, model = %settings.model, "Creating model client");

        match provider {
            LlmProvider::Gemini => {
                let mut client = GeminiClient::new(require_key()?, settings.model.clone())
                    .with_generation(settings.temperature, settings.max_tokens);
                if let Some(base_url) = &settings.base_url {
                    client = client.with_base_url(base_url.as_str());
                }
                Ok(Arc::new(client))
            }
            LlmProvider::OpenAi => Ok(Arc::new(OpenAiClient::new(
                settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                AuthHeader::Bearer,
                require_key()?,
                settings.model.clone(),
                settings.max_tokens,
                settings.temperature,
            ))),
            LlmProvider::LmStudio => {
                let base_url = settings
                    .base_url
                    .clone()
                    .ok_or(LlmClientFactoryError::MissingSetting("llm.base_url"))?;
                Ok(Arc::new(OpenAiClient::new(
                    base_url,
                    AuthHeader::Bearer,
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.max_tokens,
                    settings.temperature,
                )))
            }
            LlmProvider::Azure => {
                let endpoint = settings
                    .azure_endpoint
                    .as_ref()
                    .ok_or(LlmClientFactoryError::MissingSetting("llm.azure_endpoint"))?;
                let base_url = format!(
                    "{}/openai/deployments/{}",
                    endpoint.trim_end_matches('/'),
                    settings.model
                );
                Ok(Arc::new(OpenAiClient::new(
                    base_url,
                    AuthHeader::ApiKey,
                    require_key()?,
                    settings.model.clone(),
                    settings.max_tokens,
                    settings.temperature,
                )))
            }
            LlmProvider::Mock => {
                tracing::warn!("Using mock model client; feedback is canned");
                Ok(Arc::new(MockLlmClient))
            }
        }
    }
}
