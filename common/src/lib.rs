//! FxGate Common Types
//!
//! Shared types used across the FxGate workspace: currency codes, currency
//! pairs and the error taxonomy every front maps its failures into.

pub mod currency;
pub mod error;

pub use currency::*;
pub use error::*;
