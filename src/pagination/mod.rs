//! Pagination module
//!
//! Offset pagination against the upstream provider's results endpoint.
//!
//! # Overview
//!
//! The provider returns fixed-size pages addressed by a `start` offset and
//! signals further pages through a nested continuation descriptor
//! (`serpapi_pagination.next`). This module decodes single pages and decides,
//! page by page, whether the walk continues. The loop itself lives in
//! [`crate::engine`].

mod offset;
mod types;

pub use offset::OffsetPaginator;
pub use types::{NextPage, PageResult, PaginationState};

#[cfg(test)]
mod tests;
