//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ConversionRequest, CurrencyCode};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion form
// ─────────────────────────────────────────────────────────────────────────────

/// Fields posted by the conversion form. Missing fields decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConvertForm {
    /// Source currency code
    #[serde(default)]
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code
    #[serde(default)]
    #[schema(example = "EUR")]
    pub to: String,
    /// Raw amount as typed, echoed back into the form on re-render
    #[serde(default)]
    #[schema(example = "100")]
    pub amount: String,
}

impl ConvertForm {
    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest::new(self.from.as_str(), self.to.as_str(), self.amount.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of the history endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Base currency code
    #[param(value_type = Option<String>, example = "USD")]
    pub from: Option<CurrencyCode>,
    /// Target currency code
    #[param(value_type = Option<String>, example = "EUR")]
    pub to: Option<CurrencyCode>,
}

impl HistoryQuery {
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Both codes when present and non-empty.
    pub fn pair(&self) -> Option<(&CurrencyCode, &CurrencyCode)> {
        let from = self.from.as_ref().filter(|c| !c.is_empty())?;
        let to = self.to.as_ref().filter(|c| !c.is_empty())?;
        Some((from, to))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// Error body of the JSON endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Les paramètres \"from\" et \"to\" sont requis.")]
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
