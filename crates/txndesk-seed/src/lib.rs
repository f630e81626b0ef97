//! Static seed dataset for the record browser
//!
//! The record set and the user directory are fixed literal tables. They are
//! shipped embedded in the binary as JSON; a file-backed source is available
//! so the tables can be swapped without rebuilding, as long as the field
//! shapes match.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;

pub use error::SeedError;

const EMBEDDED_RECORDS: &str = include_str!("../data/records.json");
const EMBEDDED_USERS: &str = include_str!("../data/users.json");

// ==================== Seed Types ====================

/// Raw transaction record as found in the seed tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    /// Unique record identifier
    pub id: String,
    /// Calendar date, zero-padded year-first (YYYY-MM-DD)
    pub date: String,
    /// Branch label
    pub branch: String,
    /// Record type label ("Full" or "Short")
    #[serde(rename = "type")]
    pub record_type: String,
    /// Currency amount in rupees
    pub amount: Decimal,
    /// Free-text bank name
    pub bank: String,
    /// Code into the user directory
    pub requested_by: String,
    /// Status label ("Pending", "Approved" or "Rejected")
    pub status: String,
}

/// Raw user directory entry (code -> name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    pub code: String,
    pub name: String,
}

/// The full seed dataset: record table plus user directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub records: Vec<SeedRecord>,
    pub users: Vec<SeedUser>,
}

// ==================== Seed Source Trait ====================

/// Seed source reference type
pub type SeedRef = Arc<dyn SeedSource>;

/// Trait for seed dataset sources
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Load the seed dataset
    async fn load(&self) -> Result<SeedData, SeedError>;
}

/// Default source backed by the embedded JSON tables
#[derive(Debug, Default)]
pub struct EmbeddedSeed;

#[async_trait]
impl SeedSource for EmbeddedSeed {
    async fn load(&self) -> Result<SeedData, SeedError> {
        let records: Vec<SeedRecord> =
            serde_json::from_str(EMBEDDED_RECORDS).map_err(|e| SeedError::InvalidJson {
                source_name: "records.json".to_string(),
                message: e.to_string(),
            })?;
        let users: Vec<SeedUser> =
            serde_json::from_str(EMBEDDED_USERS).map_err(|e| SeedError::InvalidJson {
                source_name: "users.json".to_string(),
                message: e.to_string(),
            })?;
        Ok(SeedData { records, users })
    }
}

/// File-backed source: one JSON document holding both tables
#[derive(Debug)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load(&self) -> Result<SeedData, SeedError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| SeedError::InvalidJson {
            source_name: self.path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_embedded_records_parse() {
        let records: Vec<SeedRecord> = serde_json::from_str(EMBEDDED_RECORDS).unwrap();
        assert_eq!(records.len(), 8);

        let first = &records[0];
        assert_eq!(first.id, "TXN1001");
        assert_eq!(first.date, "2024-01-05");
        assert_eq!(first.branch, "Mumbai");
        assert_eq!(first.record_type, "Full");
        assert_eq!(first.amount, Decimal::from_str("125000.00").unwrap());
        assert_eq!(first.requested_by, "A123");
        assert_eq!(first.status, "Pending");
    }

    #[test]
    fn test_embedded_records_unique_ids() {
        let records: Vec<SeedRecord> = serde_json::from_str(EMBEDDED_RECORDS).unwrap();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_embedded_users_parse() {
        let users: Vec<SeedUser> = serde_json::from_str(EMBEDDED_USERS).unwrap();
        assert_eq!(users.len(), 8);
        assert_eq!(users[0].code, "A123");
        assert_eq!(users[0].name, "Sharad Verma");

        // The directory intentionally carries duplicate codes
        let dup_count = users.iter().filter(|u| u.code == "A0435").count();
        assert_eq!(dup_count, 2);
    }

    #[test]
    fn test_embedded_records_cover_unknown_requester() {
        let records: Vec<SeedRecord> = serde_json::from_str(EMBEDDED_RECORDS).unwrap();
        let users: Vec<SeedUser> = serde_json::from_str(EMBEDDED_USERS).unwrap();
        let orphan = records
            .iter()
            .find(|r| !users.iter().any(|u| u.code == r.requested_by));
        assert!(orphan.is_some());
    }

    #[tokio::test]
    async fn test_embedded_source_load() {
        let data = EmbeddedSeed::default().load().await.unwrap();
        assert_eq!(data.records.len(), 8);
        assert_eq!(data.users.len(), 8);
    }

    #[tokio::test]
    async fn test_file_source_missing_path() {
        let source = FileSeed::new(PathBuf::from("/nonexistent/seed.json"));
        let result = source.load().await;
        assert!(matches!(result, Err(SeedError::IoError(_))));
    }
}
