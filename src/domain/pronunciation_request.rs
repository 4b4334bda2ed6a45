use serde::Serialize;

pub const MISSING_FIELDS_MESSAGE: &str = "Target word, spoken word, and language are all required";

/// A validated pronunciation-check request.
///
/// All three fields are guaranteed non-empty. The spoken word is expected to
/// be lower-cased by the caller; the language is a display name such as
/// `"English"`, not a locale code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationRequest {
    target_word: String,
    spoken_word: String,
    language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", MISSING_FIELDS_MESSAGE)]
pub struct ValidationError;

impl PronunciationRequest {
    /// Checks all three fields together. The error is the same whichever
    /// field is missing.
    pub fn new(
        target_word: impl Into<String>,
        spoken_word: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let target_word = target_word.into();
        let spoken_word = spoken_word.into();
        let language = language.into();

        if target_word.is_empty() || spoken_word.is_empty() || language.is_empty() {
            return Err(ValidationError);
        }

        Ok(Self {
            target_word,
            spoken_word,
            language,
        })
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn spoken_word(&self) -> &str {
        &self.spoken_word
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}
