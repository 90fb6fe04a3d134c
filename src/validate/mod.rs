//! Request validation module
//!
//! Turns a raw inbound search request into a [`SearchRequest`] the
//! pagination engine can consume, or a validation error.
//!
//! # Credential transport
//!
//! Each deployment picks one location for the provider credential:
//!
//! - **Header**: `Authorization: Bearer <token>`
//! - **Body**: the `api_key` field of the JSON body
//!
//! Validation semantics are identical for both.

mod types;
mod validator;

pub use types::{RawSearchRequest, SearchRequest};
pub use validator::{parse_bearer, RequestValidator};
