use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::PronunciationFeedback;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").unwrap());

/// How much of the feedback shape a model reply must satisfy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMode {
    /// Any JSON value is accepted and passed through.
    #[default]
    Lax,
    /// The reply must deserialize into [`PronunciationFeedback`]. Extra
    /// fields and a missing `culturalContext` are still accepted.
    Strict,
}

#[derive(Debug, thiserror::Error)]
pub enum MalformedResponse {
    #[error("reply is not valid JSON: {0}")]
    NotJson(serde_json::Error),
    #[error("reply does not match the feedback schema: {0}")]
    SchemaMismatch(serde_json::Error),
}

/// Removes every ```` ``` ```` / ```` ```json ```` marker (any letter case)
/// and trims surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Turns a raw completion into the JSON value returned to callers.
///
/// No repair is attempted: prose around the JSON makes the whole reply
/// malformed.
pub fn normalize_response(raw: &str, schema: SchemaMode) -> Result<Value, MalformedResponse> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(MalformedResponse::NotJson)?;

    if schema == SchemaMode::Strict {
        PronunciationFeedback::deserialize(&value).map_err(MalformedResponse::SchemaMismatch)?;
    }

    Ok(value)
}
