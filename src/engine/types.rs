//! Engine types
//!
//! Configuration for the pagination engine, the per-request aggregate, and
//! the response payload it is assembled into.

use crate::config::UpstreamSettings;
use crate::pagination::PageResult;
use crate::types::{DEFAULT_ENGINE, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Configuration for the pagination engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine selector sent upstream
    pub engine: String,
    /// Hard cap on upstream calls per request
    pub max_pages: u32,
    /// Time budget for the whole walk
    pub deadline: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            max_pages: 10,
            deadline: Duration::from_secs(120),
        }
    }
}

impl EngineConfig {
    /// Create a new engine config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

impl From<&UpstreamSettings> for EngineConfig {
    fn from(settings: &UpstreamSettings) -> Self {
        Self {
            engine: settings.engine.clone(),
            max_pages: settings.max_pages,
            deadline: settings.deadline(),
        }
    }
}

/// Accumulator for one inbound request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    /// `search_metadata` from the first page
    pub metadata: Value,
    /// `search_parameters` from the first page
    pub parameters: Value,
    /// `search_information` from the first page
    pub information: Value,
    /// Every page's records, in fetch order
    pub all_results: Vec<Value>,
    /// Continuing pages counted by the loop
    pub page_count: u32,
}

impl AggregateResult {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the page-invariant sections from a page
    pub fn capture_header(&mut self, page: &mut PageResult) {
        self.metadata = std::mem::take(&mut page.search_metadata);
        self.parameters = std::mem::take(&mut page.search_parameters);
        self.information = std::mem::take(&mut page.search_information);
    }

    /// Append a page's records after those already collected
    pub fn extend(&mut self, records: Vec<Value>) {
        self.all_results.extend(records);
    }

    /// Pages reported to the caller
    ///
    /// One more than `page_count`: the page being processed when the loop
    /// exits is included.
    pub fn pages_processed(&self) -> u32 {
        self.page_count + 1
    }

    /// Number of records collected
    pub fn total_results(&self) -> usize {
        self.all_results.len()
    }

    /// Assemble the caller-facing payload
    pub fn into_response(self) -> SearchResponse {
        SearchResponse {
            pagination_info: PaginationInfo {
                total_pages_processed: self.pages_processed(),
                total_results: self.total_results(),
                results_per_page: PAGE_SIZE,
            },
            search_metadata: self.metadata,
            search_parameters: self.parameters,
            search_information: self.information,
            local_results: self.all_results,
        }
    }
}

/// Pagination summary in the response payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total_pages_processed: u32,
    pub total_results: usize,
    pub results_per_page: u32,
}

/// Aggregated response returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_metadata: Value,
    pub search_parameters: Value,
    pub search_information: Value,
    pub pagination_info: PaginationInfo,
    pub local_results: Vec<Value>,
}
