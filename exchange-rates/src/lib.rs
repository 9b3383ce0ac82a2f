//! # Exchange Rates
//!
//! Rate provider adapters implementing the `RateProvider` port:
//! - [`ExchangeRateApiClient`] - HTTP client for ExchangeRate-API v6
//! - [`FixedRateProvider`] - hardcoded table for offline development
//!
//! # Example
//! ```no_run
//! use exchange_rates::{ProviderConfig, ProviderKind, build_provider};
//! use fx_types::RateProvider;
//!
//! # async fn run() -> Result<(), fx_types::UpstreamError> {
//! let provider = build_provider(ProviderKind::ExchangeRateApi, ProviderConfig::new("my-key"));
//! let snapshot = provider.latest_rates(&"USD".into()).await?;
//! println!("{:?}", snapshot.rate(&"EUR".into()));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use fx_types::{CurrencyCode, HistoryRates, RateProvider, RateSnapshot, UpstreamError};

pub mod config;
pub mod exchangerate_api;
pub mod fixed;

pub use config::{DEFAULT_API_URL, ProviderConfig, ProviderKind};
pub use exchangerate_api::ExchangeRateApiClient;
pub use fixed::FixedRateProvider;

/// Unified provider wrapper so the service stays generic over one concrete type.
#[derive(Debug, Clone)]
pub enum Provider {
    ExchangeRateApi(ExchangeRateApiClient),
    Fixed(FixedRateProvider),
}

/// Builds the provider selected by `kind`. The fixed table ignores `config`.
pub fn build_provider(kind: ProviderKind, config: ProviderConfig) -> Provider {
    match kind {
        ProviderKind::ExchangeRateApi => {
            Provider::ExchangeRateApi(ExchangeRateApiClient::new(config))
        }
        ProviderKind::Fixed => Provider::Fixed(FixedRateProvider::new()),
    }
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::ExchangeRateApi(_) => ProviderKind::ExchangeRateApi,
            Provider::Fixed(_) => ProviderKind::Fixed,
        }
    }
}

#[async_trait]
impl RateProvider for Provider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, UpstreamError> {
        match self {
            Provider::ExchangeRateApi(p) => p.latest_rates(base).await,
            Provider::Fixed(p) => p.latest_rates(base).await,
        }
    }

    async fn history(&self, base: &CurrencyCode) -> Result<HistoryRates, UpstreamError> {
        match self {
            Provider::ExchangeRateApi(p) => p.history(base).await,
            Provider::Fixed(p) => p.history(base).await,
        }
    }
}
