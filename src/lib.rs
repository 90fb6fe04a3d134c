//! # places-proxy
//!
//! A proxy that takes one local-search query, walks every page of an
//! upstream geographic-search provider, and answers with a single
//! aggregated response.
//!
//! ## Features
//!
//! - **Sequential page walk**: offset pagination driven by the provider's
//!   continuation descriptor, bounded by a hard page cap
//! - **All-or-nothing**: any failure at any page aborts the request; partial
//!   aggregates are never returned
//! - **Deadline**: one time budget covers every upstream call of a request
//! - **Injectable transport**: the engine talks to the provider through the
//!   [`http::UpstreamClient`] trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use places_proxy::engine::{EngineConfig, PaginationEngine};
//! use places_proxy::http::{HttpClient, HttpClientConfig};
//! use places_proxy::validate::{RawSearchRequest, RequestValidator};
//!
//! #[tokio::main]
//! async fn main() -> places_proxy::Result<()> {
//!     let request = RequestValidator::default()
//!         .validate(&RawSearchRequest::new("coffee"), Some("Bearer my-key"))?;
//!
//!     let client = HttpClient::with_config(HttpClientConfig::default())?;
//!     let engine = PaginationEngine::new(EngineConfig::new().with_max_pages(5));
//!
//!     let response = engine.search(&client, &request).await?;
//!     println!("{} results", response.pagination_info.total_results);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  inbound request
//!        │
//! ┌──────┴──────┐  SearchRequest  ┌─────────────┐  RequestConfig  ┌────────────────┐
//! │  validate   │ ──────────────▶ │   engine    │ ──────────────▶ │      http      │
//! │  query      │                 │  page loop  │                 │ UpstreamClient │
//! │  credential │                 │  aggregate  │ ◀────────────── │                │
//! └─────────────┘                 └──────┬──────┘    JSON page    └────────────────┘
//!                                        │
//!                      pagination: decode page, next offset
//!                                        ▼
//!                                  SearchResponse
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the proxy
pub mod error;

/// Common types and constants
pub mod types;

/// Configuration loading
pub mod config;

/// Inbound request validation
pub mod validate;

/// Upstream HTTP client capability
pub mod http;

/// Page decoding and offset pagination
pub mod pagination;

/// Page-fetch loop and aggregation
pub mod engine;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use engine::{PaginationEngine, SearchResponse};
pub use validate::{RequestValidator, SearchRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
