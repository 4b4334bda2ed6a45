use std::fmt;

use serde_json::Value;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Error checking pronunciation. Please try again.";

/// Client-side reading of a feedback record.
///
/// Model output is never schema-checked by default, so every field is
/// optional here and a field of the wrong type counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub feedback: Option<String>,
    pub target_phonetic: Option<String>,
    pub spoken_phonetic: Option<String>,
    pub common_mistakes: Option<String>,
    pub cultural_context: Option<String>,
    pub tips: Vec<String>,
    pub encouragement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackSection {
    Summary(String),
    TargetPronunciation(String),
    YourPronunciation(String),
    CommonMistakes(String),
    CulturalContext(String),
    Tips(Vec<String>),
    Encouragement(String),
}

impl FeedbackView {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let tips = value
            .get("tips")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            is_correct: value
                .get("isCorrect")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            feedback: text("feedback"),
            target_phonetic: text("targetPhonetic"),
            spoken_phonetic: text("spokenPhonetic"),
            common_mistakes: text("commonMistakes"),
            cultural_context: text("culturalContext"),
            tips,
            encouragement: text("encouragement"),
        }
    }

    /// The negative record shown when the service could not be reached.
    pub fn transport_failure() -> Self {
        Self {
            is_correct: false,
            feedback: Some(TRANSPORT_FAILURE_MESSAGE.to_string()),
            ..Self::default()
        }
    }

    /// Sections to display, in display order. Absent fields are skipped.
    pub fn sections(&self) -> Vec<FeedbackSection> {
        let mut sections = Vec::new();

        if let Some(feedback) = &self.feedback {
            sections.push(FeedbackSection::Summary(feedback.clone()));
        }
        if let Some(phonetic) = &self.target_phonetic {
            sections.push(FeedbackSection::TargetPronunciation(phonetic.clone()));
        }
        if let Some(phonetic) = &self.spoken_phonetic {
            sections.push(FeedbackSection::YourPronunciation(phonetic.clone()));
        }
        if let Some(mistakes) = &self.common_mistakes {
            sections.push(FeedbackSection::CommonMistakes(mistakes.clone()));
        }
        if let Some(context) = &self.cultural_context {
            sections.push(FeedbackSection::CulturalContext(context.clone()));
        }
        if !self.tips.is_empty() {
            sections.push(FeedbackSection::Tips(self.tips.clone()));
        }
        if let Some(encouragement) = &self.encouragement {
            sections.push(FeedbackSection::Encouragement(encouragement.clone()));
        }

        sections
    }
}

impl fmt::Display for FeedbackSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackSection::Summary(text) => write!(f, "Feedback: {}", text),
            FeedbackSection::TargetPronunciation(text) => {
                write!(f, "Target Pronunciation: {}", text)
            }
            FeedbackSection::YourPronunciation(text) => write!(f, "Your Pronunciation: {}", text),
            FeedbackSection::CommonMistakes(text) => write!(f, "Common Mistakes: {}", text),
            FeedbackSection::CulturalContext(text) => write!(f, "Cultural Context: {}", text),
            FeedbackSection::Tips(tips) => {
                write!(f, "Tips for improvement:")?;
                for tip in tips {
                    write!(f, "\n- {}", tip)?;
                }
                Ok(())
            }
            FeedbackSection::Encouragement(text) => f.write_str(text),
        }
    }
}
