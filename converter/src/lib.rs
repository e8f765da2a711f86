//! FxGate Converter
//!
//! The converter owns the exchange rate store and exposes the conversion
//! engine as a gRPC service. Rates are loaded from a snapshot file on start
//! and written back on graceful shutdown.

pub mod config;
pub mod metrics;
pub mod server;
pub mod service;

pub use config::ConverterConfig;
pub use server::{serve, Converter};
pub use service::CurrencyConversionService;
