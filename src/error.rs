//! Error types for places-proxy
//!
//! This module defines the error hierarchy for the entire proxy.
//! All public APIs return `Result<T, Error>` where Error is defined here,
//! and every variant knows which HTTP status the caller should see.

use serde_json::Value;
use thiserror::Error;

/// Upstream error bodies longer than this are cut when echoed to callers
const MAX_BODY_DETAIL_CHARS: usize = 200;

/// The main error type for places-proxy
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("{message}")]
    Validation { message: String },

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("Upstream transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Upstream returned HTTP {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Provider error: {message}")]
    Provider { message: String, payload: Value },

    #[error("Upstream deadline of {deadline_ms}ms exceeded")]
    Timeout { deadline_ms: u64 },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Internal Errors
    // ============================================================================
    #[error("Failed to decode upstream response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a provider error from the upstream's embedded error payload
    pub fn provider(payload: Value) -> Self {
        let message = match &payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self::Provider { message, payload }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status the proxy answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation { .. } | Error::Provider { .. } => 400,
            _ => 500,
        }
    }

    /// Short summary placed in the `error` field of the response body
    pub fn summary(&self) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::HttpStatus { status, .. } => format!("upstream returned HTTP {status}"),
            Error::Provider { .. } => "provider error".to_string(),
            Error::Transport(_) => "upstream unreachable".to_string(),
            Error::Timeout { .. } => "upstream deadline exceeded".to_string(),
            _ => "internal error".to_string(),
        }
    }

    /// Optional detail placed in the `message` field of the response body
    pub fn detail(&self) -> Option<String> {
        match self {
            Error::Validation { .. } => None,
            Error::Provider { message, .. } => Some(message.clone()),
            Error::HttpStatus { body, .. } if body.is_empty() => None,
            Error::HttpStatus { body, .. } => Some(truncate_body(body)),
            other => Some(other.to_string()),
        }
    }
}

/// Bound an upstream body to a short single-line excerpt
fn truncate_body(body: &str) -> String {
    let body = body.trim();
    let mut excerpt: String = body
        .chars()
        .take(MAX_BODY_DETAIL_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if body.chars().count() > MAX_BODY_DETAIL_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}

/// Result type alias for places-proxy
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = Error::validation("missing query");
        assert_eq!(err.to_string(), "missing query");

        let err = Error::http_status(503, "unavailable");
        assert_eq!(err.to_string(), "Upstream returned HTTP 503");

        let err = Error::config("bad port");
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::validation("missing query").status_code(), 400);
        assert_eq!(Error::provider(json!("Invalid API key")).status_code(), 400);
        assert_eq!(Error::http_status(404, "").status_code(), 500);
        assert_eq!(Error::Timeout { deadline_ms: 10 }.status_code(), 500);
        assert_eq!(Error::decode("not json").status_code(), 500);
        assert_eq!(Error::internal("boom").status_code(), 500);
    }

    #[test]
    fn test_summary_and_detail() {
        let err = Error::provider(json!("Invalid API key. Your API key should be here"));
        assert_eq!(err.summary(), "provider error");
        assert_eq!(
            err.detail().as_deref(),
            Some("Invalid API key. Your API key should be here")
        );

        let err = Error::http_status(502, "");
        assert_eq!(err.summary(), "upstream returned HTTP 502");
        assert!(err.detail().is_none());

        let err = Error::validation("missing credential");
        assert_eq!(err.summary(), "missing credential");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_http_status_detail_is_bounded() {
        let err = Error::http_status(503, "busy");
        assert_eq!(err.detail().as_deref(), Some("busy"));

        let page = format!("<html>\n<body>{}</body>\n</html>", "x".repeat(5000));
        let detail = Error::http_status(502, page).detail().unwrap();
        assert_eq!(detail.chars().count(), MAX_BODY_DETAIL_CHARS + 3);
        assert!(detail.starts_with("<html> <body>"));
        assert!(detail.ends_with("..."));
        assert!(!detail.contains('\n'));
    }

    #[test]
    fn test_client_build_failure_is_internal() {
        let err = Error::config("Failed to build HTTP client: builder error");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.summary(), "internal error");
    }

    #[test]
    fn test_provider_payload_non_string() {
        let err = Error::provider(json!({"code": 42}));
        if let Error::Provider { message, payload } = err {
            assert_eq!(message, r#"{"code":42}"#);
            assert_eq!(payload["code"], 42);
        } else {
            panic!("Expected Provider");
        }
    }
}
