//! ExchangeRate-API (v6) adapter.
//!
//! `GET {api_url}/{api_key}/latest/{base}` and
//! `GET {api_url}/{api_key}/history/{base}`, both answering
//! `{ "conversion_rates": { CODE: rate, ... } }`.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use fx_types::{CurrencyCode, HistoryRates, RateProvider, RateSnapshot, UpstreamError};

use crate::config::ProviderConfig;

/// Response envelope shared by the latest and history endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_rates: Option<T>,
}

/// HTTP client for the ExchangeRate-API service.
#[derive(Debug, Clone)]
pub struct ExchangeRateApiClient {
    config: ProviderConfig,
    http: Client,
}

impl ExchangeRateApiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Builds `{api_url}/{api_key}/{endpoint}/{base}` with each segment
    /// percent-encoded.
    fn endpoint_url(&self, endpoint: &str, base: &CurrencyCode) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| UpstreamError::Transport(format!("invalid upstream URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Transport("upstream URL cannot be a base".into()))?
            .pop_if_empty()
            .push(&self.config.api_key)
            .push(endpoint)
            .push(base.as_str());
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received upstream response");

        if !status.is_success() {
            let error_type = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.error_type);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                error_type,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        if envelope.result.as_deref() == Some("error") {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                error_type: envelope.error_type,
            });
        }

        envelope
            .conversion_rates
            .ok_or_else(|| UpstreamError::Malformed("missing conversion_rates".into()))
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    #[instrument(name = "ExchangeRateApiLatest", skip(self), fields(base = %base))]
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateSnapshot, UpstreamError> {
        let url = self.endpoint_url("latest", base)?;
        let rates: HashMap<CurrencyCode, f64> = self.fetch(url).await?;
        Ok(RateSnapshot::new(base.clone(), rates))
    }

    #[instrument(name = "ExchangeRateApiHistory", skip(self), fields(base = %base))]
    async fn history(&self, base: &CurrencyCode) -> Result<HistoryRates, UpstreamError> {
        let url = self.endpoint_url("history", base)?;
        self.fetch(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const KEY: &str = "test-key";

    async fn create_mock_server(
        url_path: &str,
        response: ResponseTemplate,
    ) -> wiremock::MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn client_for(server: &MockServer) -> ExchangeRateApiClient {
        ExchangeRateApiClient::new(ProviderConfig::new(KEY).with_api_url(server.uri()))
    }

    #[test]
    fn test_endpoint_url_default_base() {
        let client = ExchangeRateApiClient::new(ProviderConfig::new("abc"));
        let url = client.endpoint_url("latest", &"USD".into()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v6.exchangerate-api.com/v6/abc/latest/USD"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash_and_encoding() {
        let client = ExchangeRateApiClient::new(
            ProviderConfig::new("abc").with_api_url("http://localhost:9000/v6/"),
        );
        let url = client.endpoint_url("history", &"U/D".into()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/v6/abc/history/U%2FD");
    }

    #[test_log::test(tokio::test)]
    async fn test_latest_rates_success() {
        let body = json!({
            "result": "success",
            "base_code": "USD",
            "conversion_rates": { "USD": 1, "EUR": 0.92, "GBP": 0.79 }
        });
        let server = create_mock_server(
            "/test-key/latest/USD",
            ResponseTemplate::new(200).set_body_json(body),
        )
        .await;

        let snapshot = client_for(&server)
            .latest_rates(&"USD".into())
            .await
            .unwrap();

        assert_eq!(snapshot.base().as_str(), "USD");
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.rate(&"EUR".into()), Some(0.92));
    }

    #[test_log::test(tokio::test)]
    async fn test_invalid_key_maps_to_status_error() {
        let body = json!({ "result": "error", "error-type": "invalid-key" });
        let server = create_mock_server(
            "/test-key/latest/USD",
            ResponseTemplate::new(403).set_body_json(body),
        )
        .await;

        let err = client_for(&server)
            .latest_rates(&"USD".into())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            UpstreamError::Status {
                status: 403,
                error_type: Some("invalid-key".into())
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_error_result_on_success_status() {
        let body = json!({ "result": "error", "error-type": "unsupported-code" });
        let server = create_mock_server(
            "/test-key/latest/ZZZ",
            ResponseTemplate::new(200).set_body_json(body),
        )
        .await;

        let err = client_for(&server)
            .latest_rates(&"ZZZ".into())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Request failed with status code 200 (unsupported-code)"
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_conversion_rates_is_malformed() {
        let server = create_mock_server(
            "/test-key/latest/USD",
            ResponseTemplate::new(200).set_body_json(json!({ "result": "success" })),
        )
        .await;

        let err = client_for(&server)
            .latest_rates(&"USD".into())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[test_log::test(tokio::test)]
    async fn test_non_json_body_is_malformed() {
        let server = create_mock_server(
            "/test-key/latest/USD",
            ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
        )
        .await;

        let err = client_for(&server)
            .latest_rates(&"USD".into())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[test_log::test(tokio::test)]
    async fn test_unmatched_path_is_status_error() {
        // No mock for this base: wiremock answers 404.
        let server = create_mock_server(
            "/test-key/latest/USD",
            ResponseTemplate::new(200).set_body_json(json!({ "conversion_rates": {} })),
        )
        .await;

        let err = client_for(&server)
            .latest_rates(&"EUR".into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test_log::test(tokio::test)]
    async fn test_history_returns_raw_rates() {
        let body = json!({
            "result": "success",
            "conversion_rates": {
                "EUR": { "2024-01-01": 0.91, "2024-01-02": 0.92 },
                "GBP": 0.79
            }
        });
        let server = create_mock_server(
            "/test-key/history/USD",
            ResponseTemplate::new(200).set_body_json(body),
        )
        .await;

        let history = client_for(&server).history(&"USD".into()).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.series_for(&"EUR".into()).value()["2024-01-01"],
            json!(0.91)
        );
        assert_eq!(history.series_for(&"GBP".into()).value(), &json!(0.79));
    }

    #[test_log::test(tokio::test)]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on port 1.
        let client = ExchangeRateApiClient::new(
            ProviderConfig::new(KEY).with_api_url("http://127.0.0.1:1"),
        );
        let err = client.latest_rates(&"USD".into()).await.unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
        assert!(!err.to_string().contains(KEY));
    }
}
