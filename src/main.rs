//! Stopwatch Channel - a stopwatch served to an application shell
//!
//! This is the main entry point for the stopwatch-channel application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use stopwatch_channel::{
    api::create_router,
    config::Config,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatch_channel={},tower_http=info", config.log_level()))
        .init();

    info!("Starting stopwatch-channel server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, channel={}",
          config.host, config.port, config.channel);

    let state = Arc::new(AppState::with_system_clock(
        config.port,
        config.host.clone(),
        config.channel.clone(),
    ));

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /channel/{} - Method channel (startStopwatch, stopStopwatch, resetStopwatch, getElapsedTime)", config.channel);
    info!("  POST /start      - Start the stopwatch");
    info!("  POST /stop       - Stop the stopwatch");
    info!("  POST /reset      - Reset the stopwatch");
    info!("  GET  /elapsed    - Elapsed milliseconds");
    info!("  GET  /status     - Stopwatch and server status");
    info!("  GET  /health     - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
