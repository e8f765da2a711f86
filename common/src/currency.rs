//! Currency identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque currency code.
///
/// Codes are compared byte-for-byte: `"usd"` and `"USD"` are different
/// currencies, and no ISO 4217 validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a new currency code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Length of the code in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the code is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn usd() -> Self {
        Self::new("USD")
    }

    pub fn eur() -> Self {
        Self::new("EUR")
    }

    pub fn inr() -> Self {
        Self::new("INR")
    }

    pub fn cad() -> Self {
        Self::new("CAD")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Directional currency pair used as a rate table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency being converted from.
    pub from: CurrencyCode,
    /// Currency being converted to.
    pub to: CurrencyCode,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Get the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
