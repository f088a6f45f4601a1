use anyhow::Context;
use textsum::core::config::AppConfig;
use textsum::features::summarize::SummaryService;
use textsum::web::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    textsum::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::Error::msg(e)
    })?;
    info!(backend = ?config.backend, "Starting summarization server");

    let summarizer =
        textsum::ai::from_config(&config).context("Failed to initialize summarizer")?;
    let state = AppState::new(SummaryService::new(summarizer));

    textsum::web::serve(state).await
}
