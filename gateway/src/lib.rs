//! FxGate HTTP Gateway
//!
//! Accepts JSON over HTTP, forwards each request to the converter's gRPC
//! service and translates the result (or the typed failure) back to JSON.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use client::ConverterClient;
pub use config::GatewayConfig;
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// RPC client for the converter service.
    pub client: ConverterClient,
}

impl AppState {
    /// Create state around an RPC client.
    pub fn new(client: ConverterClient) -> Self {
        Self { client }
    }
}

/// Creates the gateway router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::convert::routes())
        .merge(routes::rates::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
