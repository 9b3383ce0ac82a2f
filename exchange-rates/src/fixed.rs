//! Hardcoded rate table for development and demos.
//!
//! Each entry is the value of one unit in USD. Cross rates are derived by
//! going through USD, so any listed code can be used as a base.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use fx_types::{CurrencyCode, HistoryRates, RateProvider, RateSnapshot, UpstreamError};

/// `(code, value of one unit in USD)`
const BASE_TO_USD: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 1.087),
    ("GBP", 1.266),
    ("INR", 0.01203),
    ("JPY", 0.0067),
    ("CHF", 1.13),
    ("CAD", 0.74),
];

/// Offline provider answering from [`BASE_TO_USD`].
#[derive(Debug, Clone)]
pub struct FixedRateProvider {
    to_usd: HashMap<CurrencyCode, f64>,
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::from_table(BASE_TO_USD.iter().copied())
    }
}

impl FixedRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a provider from `(code, value in USD)` pairs.
    pub fn from_table<'a>(table: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            to_usd: table
                .into_iter()
                .map(|(code, rate)| (CurrencyCode::from(code), rate))
                .collect(),
        }
    }

    fn cross_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<HashMap<CurrencyCode, f64>, UpstreamError> {
        let base_usd = self
            .to_usd
            .get(base)
            .copied()
            .ok_or_else(|| UpstreamError::Status {
                status: 404,
                error_type: Some("unsupported-code".into()),
            })?;

        Ok(self
            .to_usd
            .iter()
            .map(|(code, usd)| {
                let rate = if code == base { 1.0 } else { base_usd / usd };
                (code.clone(), rate)
            })
            .collect())
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, UpstreamError> {
        Ok(RateSnapshot::new(base.clone(), self.cross_rates(base)?))
    }

    async fn history(&self, base: &CurrencyCode) -> Result<HistoryRates, UpstreamError> {
        let rates: Map<String, Value> = self
            .cross_rates(base)?
            .into_iter()
            .map(|(code, rate)| (code.to_string(), Value::from(rate)))
            .collect();
        Ok(HistoryRates::new(rates))
    }
}
