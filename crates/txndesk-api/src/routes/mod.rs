//! Route modules for the API server
//!
//! All routes are organized into modules:
//! - records: Record list, search, filtering, delete actions
//! - settings: Configuration display
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod records;
pub mod settings;
