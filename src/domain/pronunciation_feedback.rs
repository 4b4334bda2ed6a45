use serde::{Deserialize, Serialize};

/// The feedback record a model reply is expected to contain.
///
/// Replies are passed to callers verbatim; this type is only used when the
/// strict schema check is enabled and on the client side when a typed view
/// is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationFeedback {
    pub is_correct: bool,
    pub target_phonetic: String,
    pub spoken_phonetic: String,
    pub feedback: String,
    pub common_mistakes: String,
    #[serde(default)]
    pub cultural_context: Option<String>,
    pub tips: Vec<String>,
    pub encouragement: String,
}
