use anyhow::Context;
use tracing::info;

use metro_planner::config::AppConfig;
use metro_planner::logging::init_logger;
use metro_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger().context("failed to install tracing subscriber")?;

    let config = AppConfig::from_env()?;

    let network = config
        .network
        .build()
        .with_context(|| format!("failed to build the {} network", config.network))?;
    info!(
        preset = %config.network,
        stations = network.len(),
        connections = network.connection_count(),
        "network loaded"
    );

    let app = create_router(AppState::new(network));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "metro planner listening");
    info!("endpoints: GET /health, /stations, /routes/fewest-transfers, /routes/fastest");

    axum::serve(listener, app).await?;
    Ok(())
}
