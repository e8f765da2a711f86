//! Request counters for the conversion service.

use std::sync::atomic::{AtomicU64, Ordering};

/// Converter metrics.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Conversion calls received.
    pub conversions_total: AtomicU64,
    /// Conversions answered with an amount.
    pub conversions_success: AtomicU64,
    /// Conversions rejected by the engine.
    pub conversions_rejected: AtomicU64,
    /// Rates stored through the RPC surface.
    pub rates_set: AtomicU64,
    /// Rates rejected by the store.
    pub rates_rejected: AtomicU64,
}

impl Metrics {
    /// Create new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conversion result.
    pub fn conversion(&self, success: bool) {
        self.conversions_total.fetch_add(1, Ordering::Relaxed);
        if success {
            self.conversions_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.conversions_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a set-rate result.
    pub fn rate_update(&self, accepted: bool) {
        if accepted {
            self.rates_set.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rates_rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            conversions_total: self.conversions_total.load(Ordering::Relaxed),
            conversions_success: self.conversions_success.load(Ordering::Relaxed),
            conversions_rejected: self.conversions_rejected.load(Ordering::Relaxed),
            rates_set: self.rates_set.load(Ordering::Relaxed),
            rates_rejected: self.rates_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub conversions_total: u64,
    pub conversions_success: u64,
    pub conversions_rejected: u64,
    pub rates_set: u64,
    pub rates_rejected: u64,
}
