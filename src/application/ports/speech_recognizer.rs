/// Settings handed to the platform recognizer before capture starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// One final transcript per session, no partial results.
    pub fn single_utterance(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// Platform speech capture. Transcripts and errors are delivered back to the
/// owner as events, not through this trait.
pub trait SpeechRecognizer: Send {
    fn configure(&mut self, config: &RecognitionConfig);
    fn start(&mut self) -> Result<(), CaptureError>;
    fn abort(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("{0}")]
    MicrophoneAccess(String),
    #[error("speech recognition is not supported on this platform")]
    Unsupported,
}
