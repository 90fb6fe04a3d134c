//! Pagination types
//!
//! Defines the decoded page and the iteration state shared by the
//! paginator and the engine.

use crate::error::{Error, Result};
use serde_json::Value;

/// Field carrying an embedded provider error
const ERROR_FIELD: &str = "error";
/// Field carrying the page's result records
const RESULTS_FIELD: &str = "local_results";
/// Continuation descriptor and its "next page" member
const PAGINATION_FIELD: &str = "serpapi_pagination";
const NEXT_FIELD: &str = "next";

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch another page at the advanced offset
    Continue,
    /// No more pages
    Done,
}

/// One decoded upstream response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    /// `search_metadata`, opaque
    pub search_metadata: Value,
    /// `search_parameters`, opaque
    pub search_parameters: Value,
    /// `search_information`, opaque
    pub search_information: Value,
    /// Result records in upstream order
    pub local_results: Vec<Value>,
    /// Whether the continuation descriptor announced another page
    pub has_next_page: bool,
}

impl PageResult {
    /// Decode a page from the upstream JSON body
    ///
    /// A body with a non-null `error` field becomes [`Error::Provider`].
    /// A missing result list decodes as an empty page.
    pub fn from_value(mut body: Value) -> Result<Self> {
        let Some(object) = body.as_object_mut() else {
            return Err(Error::decode("upstream body is not a JSON object"));
        };

        if let Some(error) = object.remove(ERROR_FIELD).filter(|e| !e.is_null()) {
            return Err(Error::provider(error));
        }

        let local_results = match object.remove(RESULTS_FIELD) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(Error::decode(format!("'{RESULTS_FIELD}' is not an array")));
            }
        };

        let has_next_page = object
            .get(PAGINATION_FIELD)
            .and_then(|p| p.get(NEXT_FIELD))
            .is_some_and(|next| !next.is_null());

        Ok(Self {
            search_metadata: object.remove("search_metadata").unwrap_or(Value::Null),
            search_parameters: object.remove("search_parameters").unwrap_or(Value::Null),
            search_information: object.remove("search_information").unwrap_or(Value::Null),
            local_results,
            has_next_page,
        })
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.local_results.len()
    }

    /// Check if the page carries no records
    pub fn is_empty(&self) -> bool {
        self.local_results.is_empty()
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Continuing pages seen so far
    pub page_count: u32,
    /// Current offset
    pub start: u32,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this the first page of the walk?
    pub fn is_first_page(&self) -> bool {
        self.page_count == 0
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Advance to the next page
    pub fn advance(&mut self, page_size: u32) {
        self.start += page_size;
        self.page_count += 1;
    }
}
