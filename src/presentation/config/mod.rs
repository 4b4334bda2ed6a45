mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_PORT, FeedbackSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings,
    Settings,
};
