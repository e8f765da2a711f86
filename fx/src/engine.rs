//! Currency conversion against the rate store.

use fxgate_common::CurrencyCode;
use tracing::debug;

use crate::error::{FxError, FxResult};
use crate::store::RateStore;

/// Convert `amount` of `source` into `base` using the stored `source -> base` rate.
///
/// The result is a plain `f64` product with no rounding to currency precision.
/// A product that is not finite fails with [`FxError::AmountOutOfRange`].
/// The store is only read.
pub fn convert(
    amount: f64,
    source: &CurrencyCode,
    base: &CurrencyCode,
    store: &RateStore,
) -> FxResult<f64> {
    let rate = store
        .get_rate(source, base)
        .ok_or_else(|| FxError::UnsupportedCurrencyPair {
            source_currency: source.clone(),
            base_currency: base.clone(),
        })?;

    let converted = amount * rate;
    if !converted.is_finite() {
        return Err(FxError::AmountOutOfRange {
            amount,
            source_currency: source.clone(),
            base_currency: base.clone(),
        });
    }
    debug!(%source, %base, amount, rate, converted, "Converted amount");

    Ok(converted)
}
