//! HTTP client module
//!
//! Provides the upstream client capability the pagination engine is driven
//! through.
//!
//! # Features
//!
//! - **Injectable capability**: the [`UpstreamClient`] trait lets tests and
//!   alternate transports stand in for the real provider
//! - **Single attempt**: no retries or backoff, a failed call is final
//! - **Error classification**: transport faults, non-2xx statuses and
//!   undecodable bodies map to distinct error variants

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, UpstreamClient};
