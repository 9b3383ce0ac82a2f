//! # FX Client SDK
//!
//! A typed Rust client for the currency converter server.

use fx_types::{ConvertForm, CurrencyCode, HistoryQuery};
use reqwest::Client;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency converter API client.
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the rate data for a pair, exactly as the chart receives it.
    pub async fn history(
        &self,
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
    ) -> Result<serde_json::Value, ClientError> {
        let resp = self
            .http
            .get(format!("{}/history", self.base_url))
            .query(&HistoryQuery::new(from, to))
            .send()
            .await?;
        let body = Self::success_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Submits the conversion form and returns the rendered HTML page.
    pub async fn convert_page(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<String, ClientError> {
        let form = ConvertForm {
            from: from.to_string(),
            to: to.to_string(),
            amount: amount.to_string(),
        };
        let resp = self
            .http
            .post(format!("{}/convert", self.base_url))
            .form(&form)
            .send()
            .await?;
        Self::success_body(resp).await
    }

    async fn success_body(resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
