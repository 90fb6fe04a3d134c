//! Request validator

use super::types::{RawSearchRequest, SearchRequest};
use crate::error::{Error, Result};
use crate::types::CredentialSource;

const MISSING_QUERY: &str = "missing query";
const MISSING_CREDENTIAL: &str = "missing credential";
const MALFORMED_CREDENTIAL: &str = "malformed credential";

/// Validates inbound search requests for one deployment
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator {
    source: CredentialSource,
}

impl RequestValidator {
    /// Create a validator reading the credential from `source`
    pub fn new(source: CredentialSource) -> Self {
        Self { source }
    }

    /// Validate a raw request
    ///
    /// `authorization` is the raw `Authorization` header value, if any.
    /// It is ignored for body-credential deployments.
    pub fn validate(
        &self,
        raw: &RawSearchRequest,
        authorization: Option<&str>,
    ) -> Result<SearchRequest> {
        let query = raw
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| Error::validation(MISSING_QUERY))?;

        let credential = match self.source {
            CredentialSource::Header => {
                let header = authorization.ok_or_else(|| Error::validation(MISSING_CREDENTIAL))?;
                parse_bearer(header)?
            }
            CredentialSource::Body => raw
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .ok_or_else(|| Error::validation(MISSING_CREDENTIAL))?,
        };

        let coordinates = raw
            .coordinates
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string);

        Ok(SearchRequest::new(
            query.to_string(),
            coordinates,
            credential.to_string(),
        ))
    }
}

/// Extract the token from a `Bearer <token>` authorization value
///
/// The scheme is matched case-insensitively. An empty header counts as a
/// missing credential; any other scheme or an empty token is malformed.
pub fn parse_bearer(header: &str) -> Result<&str> {
    let header = header.trim();
    if header.is_empty() {
        return Err(Error::validation(MISSING_CREDENTIAL));
    }

    let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(Error::validation(MALFORMED_CREDENTIAL));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(Error::validation(MALFORMED_CREDENTIAL));
    }

    Ok(token)
}
