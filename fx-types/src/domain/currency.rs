//! Currency codes and rate snapshots.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A currency code as submitted by a user or returned by the upstream.
///
/// Codes are not checked against any list: whatever the upstream accepts is a
/// valid code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "EUR")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Set of codes offered in the currency selectors, in alphabetical order.
pub type CurrencyCatalog = BTreeSet<CurrencyCode>;

/// All conversion rates from one base currency, as fetched for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
}

impl RateSnapshot {
    pub fn new(base: CurrencyCode, rates: HashMap<CurrencyCode, f64>) -> Self {
        Self { base, rates }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Units of `to` obtained for one unit of the base currency.
    pub fn rate(&self, to: &CurrencyCode) -> Option<f64> {
        self.rates.get(to).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The key set of the snapshot.
    pub fn currencies(&self) -> CurrencyCatalog {
        self.rates.keys().cloned().collect()
    }
}
