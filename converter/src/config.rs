//! Converter configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Main converter configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// gRPC listen address.
    pub listen_addr: String,
    /// Rate snapshot file loaded on start and saved on stop.
    pub rates_file: PathBuf,
    /// Write the snapshot back on graceful shutdown.
    pub persist_on_shutdown: bool,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:50051".to_string(),
            rates_file: PathBuf::from("exchange_rates.json"),
            persist_on_shutdown: true,
            log_level: "info".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("CONVERTER_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(path) = std::env::var("CONVERTER_RATES_FILE") {
            config.rates_file = PathBuf::from(path);
        }

        if let Ok(persist) = std::env::var("CONVERTER_PERSIST_ON_SHUTDOWN") {
            if let Ok(persist) = persist.parse() {
                config.persist_on_shutdown = persist;
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

        if self.rates_file.as_os_str().is_empty() {
            return Err("Rates file path cannot be empty".to_string());
        }

        Ok(())
    }
}
