use draft_roast::api::{run_server, AppState};
use draft_roast::config::AppConfig;
use draft_roast::discord::DiscordWebhook;
use draft_roast::llm::LLMClient;
use draft_roast::services::pipeline::PickPipeline;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Draft Roast...");

    // Load Configuration
    let config = Arc::new(AppConfig::load()?);
    info!(
        "Loaded Configuration: mode={:?}, default persona={}, respond p={}",
        config.voice.mode, config.voice.default_persona, config.voice.respond_probability
    );

    // Initialize Clients
    info!("Using LLM Model: {} ({})", config.llm.model, config.llm.base_url);
    let llm = LLMClient::new(&config.llm)?;
    let webhook = DiscordWebhook::new()?;

    let pipeline = PickPipeline::new(config.clone(), Arc::new(llm), Arc::new(webhook));
    let app_state = Arc::new(AppState { pipeline });

    // Start API Server
    info!("Initializing API Server...");
    run_server(app_state, &config.server.bind_addr).await?;

    Ok(())
}
