//! Gateway configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listen address.
    pub listen_addr: String,
    /// URL of the converter gRPC service.
    pub converter_url: String,
    /// Connection timeout towards the converter.
    pub connection_timeout: Duration,
    /// Deadline for a single RPC call.
    pub rpc_timeout: Duration,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8081".to_string(),
            converter_url: "http://localhost:50051".to_string(),
            connection_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(5),
            log_level: "info".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("GATEWAY_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(url) = std::env::var("CONVERTER_URL") {
            config.converter_url = url;
        }

        if let Ok(ms) = std::env::var("GATEWAY_CONNECT_TIMEOUT_MS") {
            if let Ok(ms) = ms.parse() {
                config.connection_timeout = Duration::from_millis(ms);
            }
        }

        if let Ok(ms) = std::env::var("GATEWAY_RPC_TIMEOUT_MS") {
            if let Ok(ms) = ms.parse() {
                config.rpc_timeout = Duration::from_millis(ms);
            }
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_addr
            .parse()
            .map_err(|e| format!("Invalid listen address {:?}: {}", self.listen_addr, e))
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;

        if self.converter_url.is_empty() {
            return Err("Converter URL cannot be empty".to_string());
        }

        if self.connection_timeout.is_zero() {
            return Err("Connection timeout cannot be zero".to_string());
        }

        if self.rpc_timeout.is_zero() {
            return Err("RPC timeout cannot be zero".to_string());
        }

        Ok(())
    }
}
