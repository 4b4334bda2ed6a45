use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{CheckOutcome, CheckerError, PronunciationChecker};
use crate::domain::{FeedbackView, PronunciationRequest};

pub const CHECK_PRONUNCIATION_PATH: &str = "/api/check-pronunciation";

/// Calls a running pronunciation service over HTTP.
pub struct HttpPronunciationChecker {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpPronunciationChecker {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                CHECK_PRONUNCIATION_PATH
            ),
        }
    }
}

#[async_trait]
impl PronunciationChecker for HttpPronunciationChecker {
    async fn check(&self, request: &PronunciationRequest) -> Result<CheckOutcome, CheckerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| CheckerError::Transport(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|e| CheckerError::Transport(e.to_string()))?;
            return Ok(CheckOutcome::Rejected(body.error));
        }

        if !status.is_success() {
            return Err(CheckerError::Service(status.as_u16()));
        }

        let feedback: Value = response
            .json()
            .await
            .map_err(|e| CheckerError::Transport(e.to_string()))?;

        Ok(CheckOutcome::Feedback(FeedbackView::from_value(&feedback)))
    }
}
