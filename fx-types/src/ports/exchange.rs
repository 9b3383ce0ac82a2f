//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, fixed tables, test fakes, etc.

use std::sync::Arc;

use crate::domain::{CurrencyCode, HistoryRates, RateSnapshot};
use crate::error::UpstreamError;

/// Port trait for exchange rate providers.
///
/// Every call is independent: no caching, no retries.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the latest rates from `base` to every supported currency.
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, UpstreamError>;

    /// Fetches the history payload for `base`.
    async fn history(&self, base: &CurrencyCode) -> Result<HistoryRates, UpstreamError>;
}

#[async_trait::async_trait]
impl<P: RateProvider + ?Sized> RateProvider for Arc<P> {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, UpstreamError> {
        (**self).latest_rates(base).await
    }

    async fn history(&self, base: &CurrencyCode) -> Result<HistoryRates, UpstreamError> {
        (**self).history(base).await
    }
}
