use async_trait::async_trait;

use crate::domain::{FeedbackView, PronunciationRequest};

/// Client-side view of the check-pronunciation endpoint.
#[async_trait]
pub trait PronunciationChecker: Send + Sync {
    async fn check(&self, request: &PronunciationRequest) -> Result<CheckOutcome, CheckerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Feedback(FeedbackView),
    /// The service refused the request; carries the service's message.
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service failure: HTTP {0}")]
    Service(u16),
}
