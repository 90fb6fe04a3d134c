//! Request types
//!
//! The raw shape the server deserializes and the normalized request
//! produced by the validator.

use serde::{Deserialize, Serialize};

/// Inbound search body as received from the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchRequest {
    /// Search term
    #[serde(default)]
    pub query: Option<String>,
    /// Optional `@lat,lng,zoom` hint
    #[serde(default)]
    pub coordinates: Option<String>,
    /// Provider credential (body transport only)
    #[serde(default)]
    pub api_key: Option<String>,
}

impl RawSearchRequest {
    /// Create a raw request with a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Set the coordinate hint
    #[must_use]
    pub fn coordinates(mut self, coordinates: impl Into<String>) -> Self {
        self.coordinates = Some(coordinates.into());
        self
    }

    /// Set the body credential
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// A validated search request
///
/// Only the validator constructs these, so `query` and `credential` are
/// always non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    coordinates: Option<String>,
    credential: String,
}

impl SearchRequest {
    pub(crate) fn new(query: String, coordinates: Option<String>, credential: String) -> Self {
        Self {
            query,
            coordinates,
            credential,
        }
    }

    /// Search term
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Coordinate hint, passed through unvalidated
    pub fn coordinates(&self) -> Option<&str> {
        self.coordinates.as_deref()
    }

    /// Provider credential
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl std::fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRequest")
            .field("query", &self.query)
            .field("coordinates", &self.coordinates)
            .field("credential", &"<redacted>")
            .finish()
    }
}
