//! Common types used throughout places-proxy
//!
//! This module contains shared type definitions and provider constants
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Provider Constants
// ============================================================================

/// Number of results the provider returns per page
pub const PAGE_SIZE: u32 = 20;

/// Default upstream search endpoint
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// Default engine selector sent with every upstream request
pub const DEFAULT_ENGINE: &str = "google_maps";

/// Upper bound accepted for the page cap
pub const MAX_PAGES_LIMIT: u32 = 50;

// ============================================================================
// Credential Source
// ============================================================================

/// Where a deployment expects the caller's provider credential
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// `Authorization: Bearer <token>` header
    #[default]
    Header,
    /// `api_key` field in the JSON request body
    Body,
}
