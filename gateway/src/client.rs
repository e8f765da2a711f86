//! RPC client for the converter service.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Request, Status};
use tracing::{debug, instrument};

use fxgate_common::{CurrencyPair, FxGateError, Result};
use fxgate_protocol::{
    ConversionRequest, ConversionResponse, ConversionServiceClient, SetRateRequest,
    SetRateResponse,
};

use crate::config::GatewayConfig;

/// Cloneable handle to the converter service.
///
/// Clones share one HTTP/2 channel; each call runs on its own clone so
/// concurrent requests never wait on each other's client borrow.
#[derive(Clone)]
pub struct ConverterClient {
    inner: ConversionServiceClient<Channel>,
    rpc_timeout: Duration,
}

impl ConverterClient {
    /// Build a client that connects on first use.
    ///
    /// The gateway starts even when the converter is down; calls then fail
    /// with a transport error instead.
    pub fn connect_lazy(config: &GatewayConfig) -> Result<Self> {
        let endpoint = Endpoint::from_shared(config.converter_url.clone())
            .map_err(|e| FxGateError::ConfigurationError(e.to_string()))?
            .connect_timeout(config.connection_timeout)
            .timeout(config.rpc_timeout);

        Ok(Self {
            inner: ConversionServiceClient::new(endpoint.connect_lazy()),
            rpc_timeout: config.rpc_timeout,
        })
    }

    /// Call `ConvertCurrency`.
    #[instrument(skip(self, request), fields(
        source_currency = %request.source_currency,
        base_currency = %request.base_currency,
    ))]
    pub async fn convert(&self, request: ConversionRequest) -> Result<ConversionResponse> {
        let CurrencyPair {
            from: source_currency,
            to: base_currency,
        } = request.pair();

        let mut client = self.inner.clone();
        let response = client
            .convert_currency(self.with_deadline(request))
            .await
            .map_err(|status| match status.code() {
                Code::NotFound => FxGateError::UnsupportedCurrencyPair {
                    source_currency,
                    base_currency,
                },
                _ => error_from_status(status),
            })?;

        debug!("Conversion RPC completed");
        Ok(response.into_inner())
    }

    /// Call `SetRate`.
    #[instrument(skip(self, request), fields(
        from_currency = %request.from_currency,
        to_currency = %request.to_currency,
    ))]
    pub async fn set_rate(&self, request: SetRateRequest) -> Result<SetRateResponse> {
        let mut client = self.inner.clone();
        let response = client
            .set_rate(self.with_deadline(request))
            .await
            .map_err(error_from_status)?;

        Ok(response.into_inner())
    }

    fn with_deadline<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        request.set_timeout(self.rpc_timeout);
        request
    }
}

/// Translate an RPC failure into the shared error taxonomy.
pub fn error_from_status(status: Status) -> FxGateError {
    let message = status.message().to_string();
    match status.code() {
        Code::InvalidArgument => FxGateError::InvalidRate(message),
        Code::OutOfRange => FxGateError::AmountOutOfRange(message),
        Code::DeadlineExceeded | Code::Cancelled => FxGateError::Timeout(message),
        Code::Unavailable | Code::Unknown => FxGateError::TransportFailure(message),
        _ => FxGateError::Internal(message),
    }
}
