//! FX engine error types.

use fxgate_common::{CurrencyCode, FxGateError};
use thiserror::Error;

/// Errors that can occur in the FX engine.
#[derive(Debug, Error)]
pub enum FxError {
    /// No rate stored for the requested pair.
    #[error("currency not supported: {source_currency} to {base_currency}")]
    UnsupportedCurrencyPair {
        source_currency: CurrencyCode,
        base_currency: CurrencyCode,
    },

    /// Rate is zero, negative, not finite, or inconsistent for a self pair.
    #[error("invalid rate {rate} for {from} to {to}")]
    InvalidRate {
        from: CurrencyCode,
        to: CurrencyCode,
        rate: f64,
    },

    /// Currency code is empty or contains the snapshot key separator.
    #[error("invalid currency code \"{0}\"")]
    InvalidCurrencyCode(CurrencyCode),

    /// Converted amount does not fit in a finite `f64`.
    #[error("converted amount out of range: {amount} {source_currency} to {base_currency}")]
    AmountOutOfRange {
        amount: f64,
        source_currency: CurrencyCode,
        base_currency: CurrencyCode,
    },

    /// Rate snapshot could not be read or written.
    #[error("Rate snapshot error: {0}")]
    Snapshot(String),
}

impl From<std::io::Error> for FxError {
    fn from(err: std::io::Error) -> Self {
        FxError::Snapshot(err.to_string())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::Snapshot(err.to_string())
    }
}

impl From<FxError> for FxGateError {
    fn from(err: FxError) -> Self {
        match err {
            FxError::UnsupportedCurrencyPair {
                source_currency,
                base_currency,
            } => FxGateError::UnsupportedCurrencyPair {
                source_currency,
                base_currency,
            },
            FxError::InvalidRate { .. } | FxError::InvalidCurrencyCode(_) => {
                FxGateError::InvalidRate(err.to_string())
            }
            FxError::AmountOutOfRange { .. } => FxGateError::AmountOutOfRange(err.to_string()),
            FxError::Snapshot(msg) => FxGateError::Internal(msg),
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
