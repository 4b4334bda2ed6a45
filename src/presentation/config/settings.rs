use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::SchemaMode;

use super::Environment;

pub const DEFAULT_PORT: u16 = 9966;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    LmStudio,
    Azure,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    pub schema: SchemaMode,
}

impl Settings {
    /// Layers, lowest priority first: built-in defaults, the optional
    /// `appsettings.{environment}.toml`, `APP__SECTION__KEY` variables, then
    /// `GOOGLE_API_KEY` and `PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gemini-pro")?
            .set_default("llm.max_tokens", 1024_i64)?
            .set_default("llm.timeout_secs", 30_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("feedback.schema", "lax")?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("llm.api_key", std::env::var("GOOGLE_API_KEY").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()
    }
}
