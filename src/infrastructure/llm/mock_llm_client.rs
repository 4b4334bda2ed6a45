use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

const MOCK_FEEDBACK: &str = r#"```json
{
  "isCorrect": true,
  "targetPhonetic": "/həˈloʊ/",
  "spokenPhonetic": "/həˈloʊ/",
  "feedback": "Mock evaluation: no model was called.",
  "commonMistakes": "None recorded in mock mode.",
  "culturalContext": null,
  "tips": ["Configure a real provider to get live feedback."],
  "encouragement": "Keep practicing!"
}
```"#;

/// Offline stand-in used when `llm.provider = "mock"`. Replies in the same
/// fenced form real models tend to use.
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(MOCK_FEEDBACK.to_string())
    }
}
