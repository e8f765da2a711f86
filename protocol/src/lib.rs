//! FxGate Protocol
//!
//! Wire types for the conversion RPC service, plus the gRPC client and
//! server stubs generated from them at build time.

pub mod messages;

pub use messages::*;

/// Generated `fxgate.conversion.ConversionService` stubs.
pub mod conversion {
    include!(concat!(env!("OUT_DIR"), "/fxgate.conversion.ConversionService.rs"));
}

pub use conversion::conversion_service_client::ConversionServiceClient;
pub use conversion::conversion_service_server::{ConversionService, ConversionServiceServer};
