//! Protocol message types.
//!
//! Protobuf layout of the `fxgate.conversion` package. Field tags are part of
//! the wire contract and must not be renumbered.

use fxgate_common::{CurrencyCode, CurrencyPair};

/// Request to convert an amount into a base currency.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConversionRequest {
    /// Currency the amount is converted into.
    #[prost(string, tag = "1")]
    pub base_currency: ::prost::alloc::string::String,
    /// Currency the amount is expressed in.
    #[prost(string, tag = "2")]
    pub source_currency: ::prost::alloc::string::String,
    /// Amount to convert.
    #[prost(double, tag = "3")]
    pub transfer_amount: f64,
}

impl ConversionRequest {
    /// Create a new conversion request.
    pub fn new(
        base_currency: impl Into<String>,
        source_currency: impl Into<String>,
        transfer_amount: f64,
    ) -> Self {
        Self {
            base_currency: base_currency.into(),
            source_currency: source_currency.into(),
            transfer_amount,
        }
    }

    /// The `source -> base` pair this request converts along.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(
            CurrencyCode::new(self.source_currency.as_str()),
            CurrencyCode::new(self.base_currency.as_str()),
        )
    }
}

/// Result of a successful conversion.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConversionResponse {
    /// Amount expressed in the base currency.
    #[prost(double, tag = "1")]
    pub converted_amount: f64,
}

/// Request to store a rate and its reciprocal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetRateRequest {
    #[prost(string, tag = "1")]
    pub from_currency: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub to_currency: ::prost::alloc::string::String,
    #[prost(double, tag = "3")]
    pub rate: f64,
}

/// Acknowledgement of a stored rate.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetRateResponse {
    #[prost(string, tag = "1")]
    pub from_currency: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub to_currency: ::prost::alloc::string::String,
    #[prost(double, tag = "3")]
    pub rate: f64,
    /// Rate stored for the inverse direction.
    #[prost(double, tag = "4")]
    pub reciprocal_rate: f64,
}
