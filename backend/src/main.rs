//! Certificate Hub - Backend Server

use std::{sync::Arc, time::Duration};

use certificate_hub::{
    create_app,
    external::{CachedFeed, SheetsClient},
    AppState, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cert_server=debug,certificate_hub=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Certificate Hub Server");
    tracing::info!("Environment: {}", config.environment);

    if !config.sheets.is_configured() {
        tracing::warn!("Spreadsheet feed is not configured; feed endpoints will answer 503");
    }

    let sheets = SheetsClient::new(config.sheets.clone())?;
    let feed = CachedFeed::new(sheets, Duration::from_secs(config.cache.ttl_secs));
    tracing::info!("Feed cache TTL: {}s", config.cache.ttl_secs);

    // Create application state
    let addr = config.server_address();
    let state = AppState::new(Arc::new(feed), config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
