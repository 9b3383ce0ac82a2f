//! Historical rate payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::currency::CurrencyCode;

/// The `conversion_rates` object of an upstream history response, kept as raw
/// JSON. Entries may be plain numbers or date-to-rate mappings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HistoryRates(Map<String, Value>);

impl HistoryRates {
    pub fn new(rates: Map<String, Value>) -> Self {
        Self(rates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extracts the entry for `to`. A missing entry becomes a `null` series.
    pub fn series_for(&self, to: &CurrencyCode) -> HistorySeries {
        HistorySeries(self.0.get(to.as_str()).cloned().unwrap_or(Value::Null))
    }
}

/// Rate data for one currency pair, returned as-is to the charting script.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!(0.92))]
pub struct HistorySeries(Value);

impl HistorySeries {
    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}
