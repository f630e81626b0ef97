//! Record routes - record list, search, filtering, delete actions
//!
//! Features:
//! - Free-text search over id, type and status (explicit trigger)
//! - Structured filters: date range, branch, type, status (explicit trigger)
//! - Row-level delete with silent no-op on unknown ids
//! - Live record count
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_record_detail,
    api_records,
    api_users,
    htmx_record_delete,
    htmx_records_filter,
    htmx_records_list,
    htmx_records_search,
};

pub use page::page_records;
