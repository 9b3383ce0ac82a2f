//! Converter Application Service
//!
//! Orchestrates the conversion, currency list and history operations through
//! the rate provider port. Contains NO infrastructure logic.

use fx_types::{
    AppError, ConversionRequest, ConversionResult, CurrencyCatalog, CurrencyCode, HistoryQuery,
    HistorySeries, RateProvider,
};

/// Base currency whose snapshot supplies the selectable currency list.
pub const CATALOG_BASE: &str = "USD";

/// Message returned when `/history` is called without both codes.
pub const MISSING_PAIR_MESSAGE: &str = "Les paramètres \"from\" et \"to\" sont requis.";

/// Application service for conversion operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping providers without code changes
/// - Testing with a fake provider, without network access
pub struct ConverterService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConverterService<P> {
    /// Creates a new converter service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Codes available for the currency selectors.
    ///
    /// An upstream failure degrades to an empty catalog: the page still
    /// renders, just without choices.
    #[tracing::instrument(skip(self))]
    pub async fn list_currencies(&self) -> CurrencyCatalog {
        match self
            .provider
            .latest_rates(&CurrencyCode::from(CATALOG_BASE))
            .await
        {
            Ok(snapshot) => snapshot.currencies(),
            Err(e) => {
                tracing::error!("Erreur lors de la récupération des devises : {}", e);
                CurrencyCatalog::new()
            }
        }
    }

    /// Converts and produces the display line, or the error that prevented it.
    pub async fn try_convert(&self, req: &ConversionRequest) -> Result<String, AppError> {
        let snapshot = self.provider.latest_rates(&req.from).await?;

        // A zero rate is as unusable as a missing one.
        let rate = snapshot
            .rate(&req.to)
            .filter(|rate| *rate != 0.0)
            .ok_or_else(|| AppError::Conversion {
                from: req.from.clone(),
                to: req.to.clone(),
            })?;

        Ok(req.display_with_rate(rate))
    }

    /// Converts `req`, folding any failure into the result's error message.
    #[tracing::instrument(skip(self), fields(from = %req.from, to = %req.to, amount = %req.amount))]
    pub async fn convert(&self, req: &ConversionRequest) -> ConversionResult {
        let res = self.try_convert(req).await;
        if let Err(e) = &res {
            tracing::error!("Erreur lors de la conversion : {}", e);
        }
        res.into()
    }

    /// Rate data for the requested pair.
    #[tracing::instrument(skip(self))]
    pub async fn history(&self, query: &HistoryQuery) -> Result<HistorySeries, AppError> {
        let (from, to) = query
            .pair()
            .ok_or_else(|| AppError::Validation(MISSING_PAIR_MESSAGE.into()))?;

        let rates = self.provider.history(from).await.map_err(|e| {
            tracing::error!(
                "Erreur lors de la récupération des taux historiques : {}",
                e
            );
            AppError::from(e)
        })?;

        let series = rates.series_for(to);
        if series.is_null() {
            tracing::debug!(%from, %to, "pair absent from history payload");
        }
        Ok(series)
    }
}
