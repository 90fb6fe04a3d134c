//! Offset pagination for the provider's results endpoint
//!
//! Uses a `start` offset advanced by a fixed page size. Common pattern:
//! - `?engine=google_maps&q=coffee&start=20`

use super::types::{NextPage, PageResult, PaginationState};
use crate::http::RequestConfig;
use crate::types::PAGE_SIZE;
use crate::validate::SearchRequest;

/// Builds page requests and decides whether to continue
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Engine selector sent as `engine=`
    pub engine: String,
    /// Amount `start` advances per page
    pub page_size: u32,
}

impl OffsetPaginator {
    /// Create a paginator for an engine with the provider's page size
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            page_size: PAGE_SIZE,
        }
    }

    /// Build the upstream request for the current offset
    pub fn request_for(&self, request: &SearchRequest, state: &PaginationState) -> RequestConfig {
        RequestConfig::new()
            .query("engine", &self.engine)
            .query("q", request.query())
            .query("api_key", request.credential())
            .query_opt("ll", request.coordinates())
            .query("start", state.start.to_string())
    }

    /// Inspect a decoded page and update the state
    ///
    /// An empty page or a missing continuation descriptor ends the walk.
    pub fn process_page(&self, page: &PageResult, state: &mut PaginationState) -> NextPage {
        if page.is_empty() || !page.has_next_page {
            state.mark_done();
            return NextPage::Done;
        }

        state.advance(self.page_size);
        NextPage::Continue
    }
}
