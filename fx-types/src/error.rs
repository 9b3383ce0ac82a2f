//! Error types for the currency converter.

use crate::domain::CurrencyCode;

/// Failure of an upstream rate-provider call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("{0}")]
    Transport(String),

    /// The upstream answered with a non-success status, or reported
    /// `"result": "error"` in its body.
    #[error("Request failed with status code {status}{}", suffix(.error_type))]
    Status {
        status: u16,
        error_type: Option<String>,
    },

    /// The body could not be read as a rates payload.
    #[error("Malformed upstream response: {0}")]
    Malformed(String),
}

fn suffix(error_type: &Option<String>) -> String {
    error_type
        .as_ref()
        .map(|t| format!(" ({t})"))
        .unwrap_or_default()
}

/// Application-level errors.
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Impossible de convertir de {from} vers {to}")]
    Conversion { from: CurrencyCode, to: CurrencyCode },

    #[error("{0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_without_error_type() {
        let err = UpstreamError::Status {
            status: 404,
            error_type: None,
        };
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn test_status_message_with_error_type() {
        let err = UpstreamError::Status {
            status: 403,
            error_type: Some("invalid-key".into()),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status code 403 (invalid-key)"
        );
    }

    #[test]
    fn test_conversion_message_names_both_codes() {
        let err = AppError::Conversion {
            from: "USD".into(),
            to: "ZZZ".into(),
        };
        assert_eq!(err.to_string(), "Impossible de convertir de USD vers ZZZ");
    }

    #[test]
    fn test_upstream_is_transparent() {
        let err: AppError = UpstreamError::Transport("connection refused".into()).into();
        assert_eq!(err.to_string(), "connection refused");
    }
}
