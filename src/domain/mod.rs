mod feedback_view;
mod language;
mod pronunciation_feedback;
mod pronunciation_request;

pub use feedback_view::{FeedbackSection, FeedbackView, TRANSPORT_FAILURE_MESSAGE};
pub use language::{LANGUAGES, Language};
pub use pronunciation_feedback::PronunciationFeedback;
pub use pronunciation_request::{MISSING_FIELDS_MESSAGE, PronunciationRequest, ValidationError};
