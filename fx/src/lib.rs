//! FxGate FX Engine
//!
//! In-memory exchange rate table and the conversion computation built on it.
//!
//! # Features
//!
//! - Rate store with enforced reciprocals behind a reader/writer lock
//! - Pure conversion against a stored directional rate
//! - JSON snapshot load/save for process start and stop
//!
//! # Example
//!
//! ```rust
//! use fxgate_fx::{convert, RateStore};
//!
//! let store = RateStore::new();
//! store.set_rate("USD", "INR", 82.87).unwrap();
//!
//! let inr = convert(100.0, &"USD".into(), &"INR".into(), &store).unwrap();
//! assert_eq!(inr, 100.0 * 82.87);
//! ```

pub mod engine;
pub mod error;
pub mod snapshot;
pub mod store;

pub use engine::convert;
pub use error::{FxError, FxResult};
pub use snapshot::{load_from_file, save_to_file};
pub use store::{RateStore, SharedRateStore};
