//! Error types shared across the FxGate fronts.

use crate::CurrencyCode;
use thiserror::Error;

/// Main error type for FxGate operations.
#[derive(Error, Debug)]
pub enum FxGateError {
    /// No rate is stored for the requested source to base pair.
    #[error("currency not supported: {source_currency} to {base_currency}")]
    UnsupportedCurrencyPair {
        source_currency: CurrencyCode,
        base_currency: CurrencyCode,
    },

    /// Request body could not be decoded.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Rate rejected by the rate store.
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// Converted amount is not representable as a finite number.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// The RPC call could not be completed.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The RPC call did not finish before its deadline.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FxGateError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            FxGateError::MalformedRequest(_) | FxGateError::InvalidRate(_) => 400,
            FxGateError::UnsupportedCurrencyPair { .. } | FxGateError::AmountOutOfRange(_) => {
                422
            }
            FxGateError::TransportFailure(_) => 502,
            FxGateError::Timeout(_) => 504,
            FxGateError::ConfigurationError(_) | FxGateError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxGateError::UnsupportedCurrencyPair { .. } => "UNSUPPORTED_CURRENCY_PAIR",
            FxGateError::MalformedRequest(_) => "MALFORMED_REQUEST",
            FxGateError::InvalidRate(_) => "INVALID_RATE",
            FxGateError::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            FxGateError::TransportFailure(_) => "TRANSPORT_FAILURE",
            FxGateError::Timeout(_) => "TIMEOUT",
            FxGateError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            FxGateError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for FxGate operations.
pub type Result<T> = std::result::Result<T, FxGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_pair_message() {
        let err = FxGateError::UnsupportedCurrencyPair {
            source_currency: CurrencyCode::eur(),
            base_currency: CurrencyCode::inr(),
        };
        assert_eq!(err.to_string(), "currency not supported: EUR to INR");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FxGateError::MalformedRequest(String::new()).status_code(), 400);
        assert_eq!(FxGateError::InvalidRate(String::new()).status_code(), 400);
        assert_eq!(
            FxGateError::UnsupportedCurrencyPair {
                source_currency: CurrencyCode::usd(),
                base_currency: CurrencyCode::inr(),
            }
            .status_code(),
            422
        );
        assert_eq!(FxGateError::AmountOutOfRange(String::new()).status_code(), 422);
        assert_eq!(FxGateError::TransportFailure(String::new()).status_code(), 502);
        assert_eq!(FxGateError::Timeout(String::new()).status_code(), 504);
        assert_eq!(FxGateError::Internal(String::new()).status_code(), 500);
    }
}
