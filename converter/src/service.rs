//! gRPC conversion service.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info, instrument, warn};

use fxgate_common::CurrencyCode;
use fxgate_fx::{convert, FxError, SharedRateStore};
use fxgate_protocol::{
    ConversionRequest, ConversionResponse, ConversionService, SetRateRequest, SetRateResponse,
};

use crate::metrics::Metrics;

/// Conversion service backed by a shared rate store.
///
/// Holds no per-call state; every call reads the store under its own lock.
#[derive(Clone)]
pub struct CurrencyConversionService {
    store: SharedRateStore,
    metrics: Arc<Metrics>,
}

impl CurrencyConversionService {
    /// Create a service over `store`.
    pub fn new(store: SharedRateStore) -> Self {
        Self::with_metrics(store, Arc::new(Metrics::new()))
    }

    /// Create a service that records into existing metrics.
    pub fn with_metrics(store: SharedRateStore, metrics: Arc<Metrics>) -> Self {
        Self { store, metrics }
    }

    /// Get the shared rate store.
    pub fn store(&self) -> &SharedRateStore {
        &self.store
    }
}

/// Map an engine error onto a gRPC status carrying its message.
pub fn status_from_fx_error(err: FxError) -> Status {
    match err {
        FxError::UnsupportedCurrencyPair { .. } => Status::not_found(err.to_string()),
        FxError::InvalidRate { .. } | FxError::InvalidCurrencyCode(_) => {
            Status::invalid_argument(err.to_string())
        }
        FxError::AmountOutOfRange { .. } => Status::out_of_range(err.to_string()),
        FxError::Snapshot(_) => Status::internal(err.to_string()),
    }
}

#[tonic::async_trait]
impl ConversionService for CurrencyConversionService {
    #[instrument(skip(self, request), fields(
        source_currency = %request.get_ref().source_currency,
        base_currency = %request.get_ref().base_currency,
    ))]
    async fn convert_currency(
        &self,
        request: Request<ConversionRequest>,
    ) -> Result<Response<ConversionResponse>, Status> {
        let ConversionRequest {
            base_currency,
            source_currency,
            transfer_amount,
        } = request.into_inner();

        let source = CurrencyCode::new(source_currency);
        let base = CurrencyCode::new(base_currency);

        match convert(transfer_amount, &source, &base, &self.store) {
            Ok(converted_amount) => {
                self.metrics.conversion(true);
                Ok(Response::new(ConversionResponse { converted_amount }))
            }
            Err(e) => {
                self.metrics.conversion(false);
                warn!(error = %e, "Conversion failed");
                Err(status_from_fx_error(e))
            }
        }
    }

    #[instrument(skip(self, request), fields(
        from_currency = %request.get_ref().from_currency,
        to_currency = %request.get_ref().to_currency,
    ))]
    async fn set_rate(
        &self,
        request: Request<SetRateRequest>,
    ) -> Result<Response<SetRateResponse>, Status> {
        let SetRateRequest {
            from_currency,
            to_currency,
            rate,
        } = request.into_inner();

        if let Err(e) = self
            .store
            .set_rate(from_currency.as_str(), to_currency.as_str(), rate)
        {
            self.metrics.rate_update(false);
            warn!(error = %e, "Rejected rate update");
            return Err(status_from_fx_error(e));
        }

        self.metrics.rate_update(true);
        info!(rate, "Rate updated");

        Ok(Response::new(SetRateResponse {
            from_currency,
            to_currency,
            rate,
            reciprocal_rate: 1.0 / rate,
        }))
    }
}
