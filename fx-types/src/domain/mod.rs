//! Domain models for the currency converter.

pub mod conversion;
pub mod currency;
pub mod history;

pub use conversion::{ConversionRequest, ConversionResult};
pub use currency::{CurrencyCatalog, CurrencyCode, RateSnapshot};
pub use history::{HistoryRates, HistorySeries};
