use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use vocalingo::application::services::PronunciationService;
use vocalingo::infrastructure::llm::LlmClientFactory;
use vocalingo::infrastructure::observability::{TracingConfig, init_tracing};
use vocalingo::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let llm_client = LlmClientFactory::create(&settings.llm)?;
    let pronunciation_service = Arc::new(PronunciationService::new(
        llm_client,
        settings.feedback.schema,
        Duration::from_secs(settings.llm.timeout_secs),
    ));

    let router = create_router(AppState {
        pronunciation_service,
    });

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
