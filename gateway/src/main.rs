//! FxGate Gateway Binary
//!
//! Serves the JSON conversion API and forwards every call to the converter.

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxgate_gateway::{create_router, AppState, ConverterClient, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting FxGate gateway");

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let client = ConverterClient::connect_lazy(&config)?;
    let router = create_router(AppState::new(client));

    let listener = TcpListener::bind(config.listen_addr.as_str()).await?;
    info!(
        listen_addr = %config.listen_addr,
        converter_url = %config.converter_url,
        "HTTP server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("Gateway shutdown complete");
    Ok(())
}
