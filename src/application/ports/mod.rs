mod llm_client;
mod pronunciation_checker;
mod speech_recognizer;

pub use llm_client::{LlmClient, LlmClientError};
pub use pronunciation_checker::{CheckOutcome, CheckerError, PronunciationChecker};
pub use speech_recognizer::{CaptureError, RecognitionConfig, SpeechRecognizer};
