//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::types::CredentialSource;
use crate::validate::{RawSearchRequest, RequestValidator};
use serde_json::json;

fn search_request(coordinates: Option<&str>) -> crate::validate::SearchRequest {
    let mut raw = RawSearchRequest::new("coffee").api_key("key-1");
    raw.coordinates = coordinates.map(ToString::to_string);
    RequestValidator::new(CredentialSource::Body)
        .validate(&raw, None)
        .unwrap()
}

// ============================================================================
// PageResult Tests
// ============================================================================

#[test]
fn test_page_result_full() {
    let page = PageResult::from_value(json!({
        "search_metadata": {"id": "abc"},
        "search_parameters": {"q": "coffee"},
        "search_information": {"local_results_state": "Results for exact spelling"},
        "local_results": [{"position": 1}, {"position": 2}],
        "serpapi_pagination": {"next": "https://serpapi.com/search.json?start=20"}
    }))
    .unwrap();

    assert_eq!(page.search_metadata["id"], "abc");
    assert_eq!(page.search_parameters["q"], "coffee");
    assert_eq!(page.len(), 2);
    assert_eq!(page.local_results[1]["position"], 2);
    assert!(page.has_next_page);
}

#[test]
fn test_page_result_missing_fields() {
    let page = PageResult::from_value(json!({})).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next_page);
    assert!(page.search_metadata.is_null());
}

#[test]
fn test_page_result_descriptor_without_next() {
    let page = PageResult::from_value(json!({
        "local_results": [{"position": 1}],
        "serpapi_pagination": {"current": 1}
    }))
    .unwrap();
    assert!(!page.has_next_page);

    let page = PageResult::from_value(json!({
        "local_results": [{"position": 1}],
        "serpapi_pagination": {"next": null}
    }))
    .unwrap();
    assert!(!page.has_next_page);
}

#[test]
fn test_page_result_provider_error() {
    let err = PageResult::from_value(json!({
        "error": "Invalid API key.",
        "local_results": [{"position": 1}]
    }))
    .unwrap_err();

    match err {
        Error::Provider { message, .. } => assert_eq!(message, "Invalid API key."),
        other => panic!("Expected Provider, got {other:?}"),
    }
}

#[test]
fn test_page_result_null_error_is_ignored() {
    let page = PageResult::from_value(json!({"error": null, "local_results": []})).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_page_result_rejects_non_object() {
    let err = PageResult::from_value(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_page_result_rejects_non_array_results() {
    let err = PageResult::from_value(json!({"local_results": {"a": 1}})).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.page_count, 0);
    assert_eq!(state.start, 0);
    assert!(!state.done);
    assert!(state.is_first_page());
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::new();
    state.advance(20);
    state.advance(20);
    assert_eq!(state.page_count, 2);
    assert_eq!(state.start, 40);
    assert!(!state.is_first_page());

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// OffsetPaginator Tests
// ============================================================================

#[test]
fn test_request_for_first_page() {
    let paginator = OffsetPaginator::new("google_maps");
    let request = search_request(Some("@40.7,-74.0,14z"));

    let config = paginator.request_for(&request, &PaginationState::new());
    assert_eq!(config.get("engine"), Some("google_maps"));
    assert_eq!(config.get("q"), Some("coffee"));
    assert_eq!(config.get("api_key"), Some("key-1"));
    assert_eq!(config.get("ll"), Some("@40.7,-74.0,14z"));
    assert_eq!(config.get("start"), Some("0"));
}

#[test]
fn test_request_for_omits_missing_coordinates() {
    let paginator = OffsetPaginator::new("google_maps");
    let mut state = PaginationState::new();
    state.advance(paginator.page_size);

    let config = paginator.request_for(&search_request(None), &state);
    assert_eq!(config.get("ll"), None);
    assert_eq!(config.get("start"), Some("20"));
}

#[test]
fn test_process_page_continues() {
    let paginator = OffsetPaginator::new("google_maps");
    let mut state = PaginationState::new();
    let page = PageResult {
        local_results: vec![json!({"position": 1})],
        has_next_page: true,
        ..Default::default()
    };

    let next = paginator.process_page(&page, &mut state);
    assert_eq!(next, NextPage::Continue);
    assert_eq!(state.page_count, 1);
    assert_eq!(state.start, 20);
}

#[test]
fn test_process_page_stops_on_empty() {
    let paginator = OffsetPaginator::new("google_maps");
    let mut state = PaginationState::new();
    let page = PageResult {
        has_next_page: true,
        ..Default::default()
    };

    assert_eq!(paginator.process_page(&page, &mut state), NextPage::Done);
    assert!(state.done);
    assert_eq!(state.page_count, 0);
}

#[test]
fn test_process_page_stops_without_descriptor() {
    let paginator = OffsetPaginator::new("google_maps");
    let mut state = PaginationState::new();
    let page = PageResult {
        local_results: vec![json!({"position": 1})],
        has_next_page: false,
        ..Default::default()
    };

    assert_eq!(paginator.process_page(&page, &mut state), NextPage::Done);
    assert_eq!(state.start, 0);
}
