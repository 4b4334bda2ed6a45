use crate::application::ports::{
    CaptureError, CheckOutcome, PronunciationChecker, RecognitionConfig, SpeechRecognizer,
};
use crate::domain::{FeedbackView, Language, PronunciationRequest};

const MISSING_TARGET_WHILE_SPEAKING: &str = "Please enter a target word before speaking.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter a target word before starting.")]
    MissingTargetWord,
    #[error("a capture session is already active")]
    AlreadyListening,
    #[error("Microphone access error: {0}. Please check your browser settings.")]
    MicrophoneAccess(String),
    #[error("Speech recognition is not supported in this browser.")]
    RecognitionUnsupported,
}

/// One learner's practice loop: capture a word, send it for checking, keep
/// the latest transcription, feedback and error for display.
///
/// The session owns the recognizer. At most one capture is active at a time,
/// and the recognizer is aborted when the language changes and when the
/// session is dropped.
pub struct PracticeSession<R, C>
where
    R: SpeechRecognizer,
    C: PronunciationChecker,
{
    recognizer: R,
    checker: C,
    language: Language,
    target_word: String,
    state: SessionState,
    transcription: Option<String>,
    feedback: Option<FeedbackView>,
    error: Option<String>,
}

impl<R, C> PracticeSession<R, C>
where
    R: SpeechRecognizer,
    C: PronunciationChecker,
{
    pub fn new(mut recognizer: R, checker: C, language: Language) -> Self {
        recognizer.configure(&RecognitionConfig::single_utterance(language.code));
        Self {
            recognizer,
            checker,
            language,
            target_word: String::new(),
            state: SessionState::Idle,
            transcription: None,
            feedback: None,
            error: None,
        }
    }

    pub fn set_target_word(&mut self, word: impl Into<String>) {
        self.target_word = word.into();
    }

    pub fn select_language(&mut self, language: Language) {
        self.recognizer.abort();
        self.recognizer
            .configure(&RecognitionConfig::single_utterance(language.code));
        self.language = language;
        self.state = SessionState::Idle;
    }

    pub fn start_listening(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Idle {
            return Err(SessionError::AlreadyListening);
        }
        self.error = None;

        if self.target_word.is_empty() {
            return Err(self.fail(SessionError::MissingTargetWord));
        }

        if let Err(e) = self.recognizer.start() {
            let error = match e {
                CaptureError::MicrophoneAccess(detail) => SessionError::MicrophoneAccess(detail),
                CaptureError::Unsupported => SessionError::RecognitionUnsupported,
            };
            return Err(self.fail(error));
        }

        self.state = SessionState::Listening;
        Ok(())
    }

    /// Handles the recognizer's final transcript. The check runs while the
    /// session is mutably borrowed, so callers only ever observe `Idle`
    /// afterwards.
    pub async fn on_transcript(&mut self, transcript: &str) {
        let transcript = transcript.to_lowercase();
        self.transcription = Some(transcript.clone());

        if self.target_word.is_empty() {
            self.error = Some(MISSING_TARGET_WHILE_SPEAKING.to_string());
            self.state = SessionState::Idle;
            return;
        }

        match PronunciationRequest::new(
            self.target_word.to_lowercase(),
            transcript,
            self.language.name,
        ) {
            Ok(request) => self.check(&request).await,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.state = SessionState::Idle;
    }

    pub fn on_recognition_error(&mut self, detail: &str) {
        tracing::warn!(error = detail, "Speech recognition error");
        self.state = SessionState::Idle;
        self.error = Some(format!(
            "Speech recognition error: {}. Please try again.",
            detail
        ));
    }

    pub fn on_recognition_end(&mut self) {
        if self.state == SessionState::Listening {
            self.state = SessionState::Idle;
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn transcription(&self) -> Option<&str> {
        self.transcription.as_deref()
    }

    pub fn feedback(&self) -> Option<&FeedbackView> {
        self.feedback.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    async fn check(&mut self, request: &PronunciationRequest) {
        match self.checker.check(request).await {
            Ok(CheckOutcome::Feedback(view)) => self.feedback = Some(view),
            Ok(CheckOutcome::Rejected(message)) => self.error = Some(message),
            Err(e) => {
                tracing::error!(error = %e, "Error checking pronunciation");
                self.feedback = Some(FeedbackView::transport_failure());
            }
        }
    }

    fn fail(&mut self, error: SessionError) -> SessionError {
        self.error = Some(error.to_string());
        error
    }
}

impl<R, C> Drop for PracticeSession<R, C>
where
    R: SpeechRecognizer,
    C: PronunciationChecker,
{
    fn drop(&mut self) {
        self.recognizer.abort();
    }
}
