//! Error types for txndesk-seed

use thiserror::Error;

/// Errors raised while loading seed data
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid JSON in {source_name}: {message}")]
    InvalidJson {
        source_name: String,
        message: String,
    },

    #[error("IO error while reading seed data")]
    IoError(#[from] std::io::Error),
}
