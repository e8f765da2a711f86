//! Converter process lifecycle.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tonic::transport::server::TcpIncoming;
use tonic::transport::Server;
use tracing::{info, instrument, warn};

use fxgate_common::{FxGateError, Result};
use fxgate_fx::{load_from_file, save_to_file, RateStore, SharedRateStore};
use fxgate_protocol::ConversionServiceServer;

use crate::config::ConverterConfig;
use crate::metrics::Metrics;
use crate::service::CurrencyConversionService;

/// Serve the conversion service on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    service: CurrencyConversionService,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let incoming = TcpIncoming::from_listener(listener, true, None)
        .map_err(|e| FxGateError::TransportFailure(e.to_string()))?;

    Server::builder()
        .add_service(ConversionServiceServer::new(service))
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await
        .map_err(|e| FxGateError::TransportFailure(e.to_string()))
}

/// The converter node: rate store, metrics and configuration.
pub struct Converter {
    config: ConverterConfig,
    store: SharedRateStore,
    metrics: Arc<Metrics>,
}

impl Converter {
    /// Create a converter with an empty rate store.
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            store: Arc::new(RateStore::new()),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Get the shared rate store.
    pub fn store(&self) -> SharedRateStore {
        self.store.clone()
    }

    /// Get the metrics handle.
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    /// Populate the store from the configured snapshot file.
    ///
    /// A missing or unreadable snapshot is logged and the store stays empty.
    pub fn load_rates(&self) -> usize {
        let path = &self.config.rates_file;

        if !path.exists() {
            info!(path = %path.display(), "No rate snapshot found, starting empty");
            return 0;
        }

        match load_from_file(&self.store, path) {
            Ok(count) => count,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error loading exchange rates from file");
                0
            }
        }
    }

    /// Write the store back to the configured snapshot file.
    pub fn save_rates(&self) -> Result<usize> {
        save_to_file(&self.store, &self.config.rates_file).map_err(FxGateError::from)
    }

    /// Run the converter until `shutdown` resolves, then persist rates.
    #[instrument(skip(self, shutdown), fields(listen_addr = %self.config.listen_addr))]
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let addr = self
            .config
            .socket_addr()
            .map_err(FxGateError::ConfigurationError)?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| FxGateError::TransportFailure(e.to_string()))?;

        let loaded = self.load_rates();
        info!(
            local_addr = ?listener.local_addr().ok(),
            rates = loaded,
            "Converter gRPC server started"
        );

        let service = CurrencyConversionService::with_metrics(self.store(), self.metrics());
        serve(listener, service, shutdown).await?;

        info!(metrics = ?self.metrics.snapshot(), "Converter gRPC server stopped");

        if self.config.persist_on_shutdown {
            if let Err(e) = self.save_rates() {
                warn!(error = %e, "Error saving exchange rates to file");
            }
        }

        Ok(())
    }
}
