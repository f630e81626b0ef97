//! Record API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_records: Get visible records (JSON)
//! - api_record_detail: Get single record (JSON)
//! - api_users: Get the user directory (JSON)
//! - htmx_records_list: Current visible set (HTML fragment, no recompute)
//! - htmx_records_search: Free-text search trigger (HTML fragment)
//! - htmx_records_filter: Structured filter trigger (HTML fragment)
//! - htmx_record_delete: Remove one record (HTML fragment)

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Query;
use std::collections::HashMap;
use txndesk_core::{FilterField, RecordsResponse};

/// Get the currently visible records (JSON API)
pub async fn api_records(state: axum::extract::State<AppState>) -> String {
    let store = state.store.read().await;
    let response = RecordsResponse {
        records: store.visible_records(),
        total_count: store.count(),
    };
    serde_json::to_string(&response).unwrap_or_default()
}

/// Get single record detail (JSON API)
pub async fn api_record_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> String {
    let store = state.store.read().await;
    let record_id = path.0;

    match store.record(&record_id) {
        Some(record) => serde_json::to_string(&record).unwrap_or_default(),
        None => {
            let err = ApiError::NotFound {
                resource: format!("record {}", record_id),
            };
            format!(r#"{{"error": "{}"}}"#, err)
        }
    }
}

/// Get the user directory (JSON API)
pub async fn api_users(state: axum::extract::State<AppState>) -> String {
    let store = state.store.read().await;
    serde_json::to_string(&store.users()).unwrap_or_default()
}

/// HTMX: Render the current visible set without recomputing anything
pub async fn htmx_records_list(state: axum::extract::State<AppState>) -> String {
    let store = state.store.read().await;
    super::page::render_records_partial(&store.visible_records(), &store.users())
}

/// HTMX: Free-text search trigger
///
/// Stores the term, recomputes the visible set from the full set using only
/// the search predicate, and returns the refreshed fragment. Structured
/// filters applied earlier are discarded by the recompute.
pub async fn htmx_records_search(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let store = state.store.read().await;
    let term = params.get("q").map(|s| s.as_str()).unwrap_or("");

    store.set_search_term(term);
    store.run_search();
    log::debug!("search trigger: term={:?}", term);

    super::page::render_records_partial(&store.visible_records(), &store.users())
}

/// HTMX: Structured filter trigger
///
/// Stores each criterion field, recomputes the visible set from the full
/// set using the criteria conjunction, and returns the refreshed fragment.
pub async fn htmx_records_filter(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> String {
    let store = state.store.read().await;

    let field_param = |name: &str, fallback: &str| -> String {
        params
            .get(name)
            .map(|s| s.to_string())
            .unwrap_or_else(|| fallback.to_string())
    };

    store.set_filter_field(FilterField::DateFrom, &field_param("from", ""));
    store.set_filter_field(FilterField::DateTo, &field_param("to", ""));
    store.set_filter_field(FilterField::Branch, &field_param("branch", "ALL"));
    store.set_filter_field(FilterField::Type, &field_param("type", "ALL"));
    store.set_filter_field(FilterField::Status, &field_param("status", "ALL"));
    store.apply_filters();
    log::debug!("filter trigger: criteria={:?}", store.criteria());

    super::page::render_records_partial(&store.visible_records(), &store.users())
}

/// HTMX: Remove one record from view state
///
/// Unknown ids are a silent no-op; the fragment is returned either way.
pub async fn htmx_record_delete(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<String>,
) -> String {
    let store = state.store.read().await;
    let record_id = path.0;

    store.delete_record(&record_id);
    log::debug!("delete trigger: id={}", record_id);

    super::page::render_records_partial(&store.visible_records(), &store.users())
}
