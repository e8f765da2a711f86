//! Gateway routes.

pub mod convert;
pub mod health;
pub mod rates;
