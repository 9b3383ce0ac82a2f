//! Provider configuration.

use std::fmt;
use std::str::FromStr;

/// Base URL of the ExchangeRate-API v6 service.
pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Connection settings for the upstream rate API.
///
/// Built once at start-up and handed to the client; nothing reads the
/// environment after that.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the upstream base URL (used by tests and mirrors).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &if self.has_api_key() { "***" } else { "<unset>" })
            .finish()
    }
}

/// Which rate provider backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    ExchangeRateApi,
    Fixed,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown rate provider: {0} (expected `exchangerate-api` or `fixed`)")]
pub struct UnknownProvider(String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exchangerate-api" | "exchangerate_api" => Ok(ProviderKind::ExchangeRateApi),
            "fixed" => Ok(ProviderKind::Fixed),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::ExchangeRateApi => f.write_str("exchangerate-api"),
            ProviderKind::Fixed => f.write_str("fixed"),
        }
    }
}
