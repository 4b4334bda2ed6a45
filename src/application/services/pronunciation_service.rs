use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::prompt_builder::build_evaluation_prompt;
use crate::application::services::response_normalizer::{
    MalformedResponse, SchemaMode, normalize_response,
};
use crate::domain::{PronunciationRequest, ValidationError};

/// Prompt, invoke, normalize. One model call per request, never retried.
pub struct PronunciationService {
    llm_client: Arc<dyn LlmClient>,
    schema: SchemaMode,
    timeout: Duration,
}

impl PronunciationService {
    pub fn new(llm_client: Arc<dyn LlmClient>, schema: SchemaMode, timeout: Duration) -> Self {
        Self {
            llm_client,
            schema,
            timeout,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(language = %request.language(), schema = ?self.schema)
    )]
    pub async fn check(&self, request: &PronunciationRequest) -> Result<Value, PronunciationError> {
        let prompt = build_evaluation_prompt(
            request.target_word(),
            request.spoken_word(),
            request.language(),
        );
        tracing::debug!(prompt_chars = prompt.chars().count(), "Built evaluation prompt");

        let raw = tokio::time::timeout(self.timeout, self.llm_client.complete(&prompt))
            .await
            .map_err(|_| PronunciationError::Upstream(LlmClientError::Timeout(self.timeout.as_secs())))?
            .map_err(PronunciationError::Upstream)?;

        let feedback =
            normalize_response(&raw, self.schema).map_err(PronunciationError::MalformedResponse)?;

        let is_correct = feedback.get("isCorrect").and_then(Value::as_bool);
        tracing::info!(is_correct = ?is_correct, "Pronunciation check completed");

        Ok(feedback)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PronunciationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("upstream: {0}")]
    Upstream(LlmClientError),
    #[error("malformed response: {0}")]
    MalformedResponse(MalformedResponse),
}
