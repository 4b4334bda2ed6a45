use vocalingo::application::services::SchemaMode;
use vocalingo::presentation::config::DEFAULT_PORT;
use vocalingo::presentation::{Environment, LlmProvider, Settings};

#[test]
fn given_no_settings_file_when_loading_then_uses_built_in_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.llm.provider, LlmProvider::Gemini);
    assert_eq!(settings.llm.model, "gemini-pro");
    assert_eq!(settings.llm.timeout_secs, 30);
    assert_eq!(settings.llm.base_url, None);
    assert_eq!(settings.feedback.schema, SchemaMode::Lax);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.server.host, "0.0.0.0");
    if std::env::var("PORT").is_err() {
        assert_eq!(settings.server.port, DEFAULT_PORT);
    }
}
