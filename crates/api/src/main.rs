//! Praise API Server

use std::sync::Arc;
use tracing::info;

use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("client=debug".parse()?)
                .add_directive("milestones=debug".parse()?)
                .add_directive("api=debug".parse()?),
        )
        .init();

    info!("🏅 Starting Praise API");

    // Load configuration
    let config = common::Config::from_env();
    info!("Using backend at {}", config.backend_url);

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config)?);
    let app = api::app(state);

    info!("🚀 Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
