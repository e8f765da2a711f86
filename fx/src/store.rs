//! Exchange rate store with enforced reciprocals.

use fxgate_common::{CurrencyCode, CurrencyPair};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{FxError, FxResult};

/// Thread-safe table of directional exchange rates.
///
/// Every write of `from -> to` also writes `to -> from` with the reciprocal
/// rate inside the same write lock, so readers never see half a pair.
#[derive(Debug, Default)]
pub struct RateStore {
    rates: RwLock<HashMap<CurrencyPair, f64>>,
}

impl RateStore {
    /// Create an empty rate store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `rate` for `from -> to` and `1 / rate` for `to -> from`.
    ///
    /// Rejects empty codes and codes containing `/`, rates that are not
    /// strictly positive and finite, and self pairs with a rate other than 1.
    /// The store is left untouched on error.
    pub fn set_rate(
        &self,
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
        rate: f64,
    ) -> FxResult<()> {
        let pair = CurrencyPair::new(from, to);

        for code in [&pair.from, &pair.to] {
            if !is_valid_code(code) {
                return Err(FxError::InvalidCurrencyCode(code.clone()));
            }
        }

        // A self pair is its own reciprocal, so only 1.0 is consistent.
        if !is_valid_rate(rate) || (pair.from == pair.to && rate != 1.0) {
            return Err(FxError::InvalidRate {
                from: pair.from,
                to: pair.to,
                rate,
            });
        }

        let reciprocal = 1.0 / rate;
        let inverse = pair.inverse();

        debug!(pair = %pair, rate, reciprocal, "Setting rate");

        let mut rates = self.rates.write();
        rates.insert(pair, rate);
        rates.insert(inverse, reciprocal);

        Ok(())
    }

    /// Look up the rate for `from -> to`.
    pub fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        let pair = CurrencyPair::new(from.clone(), to.clone());
        self.rates.read().get(&pair).copied()
    }

    /// Replace the whole table with `entries`, verbatim.
    ///
    /// No reciprocals are derived: a snapshot already carries them.
    pub fn load_snapshot(
        &self,
        entries: impl IntoIterator<Item = (CurrencyPair, f64)>,
    ) -> FxResult<()> {
        let mut loaded = HashMap::new();
        for (pair, rate) in entries {
            if !is_valid_rate(rate) {
                return Err(FxError::InvalidRate {
                    from: pair.from,
                    to: pair.to,
                    rate,
                });
            }
            loaded.insert(pair, rate);
        }

        *self.rates.write() = loaded;
        Ok(())
    }

    /// Copy of every stored entry, sorted by pair.
    pub fn snapshot(&self) -> Vec<(CurrencyPair, f64)> {
        let mut entries: Vec<_> = self
            .rates
            .read()
            .iter()
            .map(|(pair, rate)| (pair.clone(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of directional entries, reciprocals included.
    pub fn len(&self) -> usize {
        self.rates.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rates.read().is_empty()
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

/// A code must survive the snapshot key encoding.
pub(crate) fn is_valid_code(code: &CurrencyCode) -> bool {
    !code.is_empty() && !code.code().contains('/')
}

/// Rate store shared between the RPC service and the persistence path.
pub type SharedRateStore = Arc<RateStore>;
