//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use exchange_rates::{DEFAULT_API_URL, ProviderConfig, ProviderKind};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub provider_kind: ProviderKind,
    pub provider: ProviderConfig,
    pub static_dir: PathBuf,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let provider_kind = env::var("RATE_PROVIDER")
            .map(|s| s.parse())
            .unwrap_or(Ok(ProviderKind::default()))?;

        // Upstream calls fail without a key; the page still renders.
        let api_key = env::var("API_KEY").unwrap_or_default();
        let api_url =
            env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        let otlp_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            port,
            provider_kind,
            provider: ProviderConfig::new(api_key).with_api_url(api_url),
            static_dir,
            otlp_endpoint,
        })
    }
}
