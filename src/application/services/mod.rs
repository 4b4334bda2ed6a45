mod practice_session;
mod prompt_builder;
mod pronunciation_service;
mod response_normalizer;

pub use practice_session::{PracticeSession, SessionError, SessionState};
pub use prompt_builder::build_evaluation_prompt;
pub use pronunciation_service::{PronunciationError, PronunciationService};
pub use response_normalizer::{
    MalformedResponse, SchemaMode, normalize_response, strip_code_fences,
};
