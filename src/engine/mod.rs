//! Execution engine module
//!
//! The page-fetch loop and result aggregation.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PaginationEngine` - Walks the provider's pages for one search request
//! - `EngineConfig` - Page cap, engine selector and deadline
//! - `AggregateResult` / `SearchResponse` - The accumulator and the payload
//!   assembled from it
//!
//! Pages are fetched strictly in sequence. The first failure at any page
//! aborts the walk and whatever was collected is dropped.

mod types;

pub use types::{AggregateResult, EngineConfig, PaginationInfo, SearchResponse};

use crate::error::{Error, Result};
use crate::http::UpstreamClient;
use crate::pagination::{NextPage, OffsetPaginator, PageResult, PaginationState};
use crate::validate::SearchRequest;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Drives the upstream page walk
///
/// The engine holds only configuration; the HTTP capability is passed to
/// every call so nothing is shared between requests.
#[derive(Debug, Clone)]
pub struct PaginationEngine {
    config: EngineConfig,
    paginator: OffsetPaginator,
}

impl PaginationEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        let paginator = OffsetPaginator::new(&config.engine);
        Self { config, paginator }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fetch every page for `request` and assemble the payload
    pub async fn search(
        &self,
        client: &dyn UpstreamClient,
        request: &SearchRequest,
    ) -> Result<SearchResponse> {
        self.aggregate(client, request)
            .await
            .map(AggregateResult::into_response)
    }

    /// Fetch every page for `request` into an aggregate
    pub async fn aggregate(
        &self,
        client: &dyn UpstreamClient,
        request: &SearchRequest,
    ) -> Result<AggregateResult> {
        let started = Instant::now();
        let deadline = tokio::time::Instant::now() + self.config.deadline;
        let deadline_ms = self.config.deadline.as_millis() as u64;

        let mut state = PaginationState::new();
        let mut aggregate = AggregateResult::new();

        while state.page_count < self.config.max_pages {
            if tokio::time::Instant::now() >= deadline {
                warn!("Deadline reached before page {}", state.page_count);
                return Err(Error::Timeout { deadline_ms });
            }

            let page_request = self.paginator.request_for(request, &state);
            debug!("Fetching page {} (start={})", state.page_count, state.start);

            let body = tokio::time::timeout_at(deadline, client.get_json(&page_request))
                .await
                .map_err(|_| {
                    warn!("Deadline exceeded while fetching page {}", state.page_count);
                    Error::Timeout { deadline_ms }
                })??;

            let mut page = PageResult::from_value(body)?;

            if state.is_first_page() {
                aggregate.capture_header(&mut page);
            }

            debug!(
                "Page {} returned {} results (next: {})",
                state.page_count,
                page.len(),
                page.has_next_page
            );

            // Decide before appending; an empty page appends nothing.
            let next = self.paginator.process_page(&page, &mut state);
            aggregate.extend(page.local_results);

            if let NextPage::Done = next {
                break;
            }
        }

        aggregate.page_count = state.page_count;

        if !state.done {
            info!("Page cap of {} reached", self.config.max_pages);
        }

        info!(
            pages = aggregate.pages_processed(),
            results = aggregate.total_results(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search aggregated"
        );

        Ok(aggregate)
    }
}
