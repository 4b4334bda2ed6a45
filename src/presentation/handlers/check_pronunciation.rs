use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::PronunciationError;
use crate::domain::{MISSING_FIELDS_MESSAGE, PronunciationRequest, ValidationError};
use crate::presentation::state::AppState;

pub const PARSE_FAILURE_MESSAGE: &str = "Error parsing API response";
pub const PROCESSING_FAILURE_MESSAGE: &str = "Error processing pronunciation check";

/// Wire form of a check request. Fields are loosely typed so that a missing
/// field, a `null` and a non-string value all fail validation the same way.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPronunciationPayload {
    #[serde(default)]
    pub target_word: Option<Value>,
    #[serde(default)]
    pub spoken_word: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CheckPronunciationPayload {
    /// Reads the fields by name from a JSON object. Any other JSON shape
    /// (array, string, number, `null`) yields an empty payload.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn into_request(self) -> Result<PronunciationRequest, ValidationError> {
        PronunciationRequest::new(
            string_field(self.target_word),
            string_field(self.spoken_word),
            string_field(self.language),
        )
    }
}

fn string_field(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn check_pronunciation_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(Json(body)) => CheckPronunciationPayload::from_body(body),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable request body");
            CheckPronunciationPayload::default()
        }
    };

    match run_check(&state, payload).await {
        Ok(feedback) => (StatusCode::OK, Json(feedback)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn run_check(
    state: &AppState,
    payload: CheckPronunciationPayload,
) -> Result<Value, PronunciationError> {
    let request = payload.into_request()?;
    tracing::debug!(
        target_word = %request.target_word(),
        spoken_word = %request.spoken_word(),
        language = %request.language(),
        "Checking pronunciation"
    );
    state.pronunciation_service.check(&request).await
}

fn error_response(error: &PronunciationError) -> Response {
    let (status, message) = match error {
        PronunciationError::Validation(_) => {
            tracing::warn!("Rejected incomplete pronunciation request");
            (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
        }
        PronunciationError::MalformedResponse(e) => {
            tracing::error!(error = %e, "JSON parsing error");
            (StatusCode::INTERNAL_SERVER_ERROR, PARSE_FAILURE_MESSAGE)
        }
        PronunciationError::Upstream(e) => {
            tracing::error!(error = %e, "Error processing pronunciation check");
            (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILURE_MESSAGE)
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
