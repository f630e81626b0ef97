//! Core record store and business logic
//!
//! The store owns the full record set and the derived visible subset. The
//! visible subset is only ever recomputed from the full set by one of the
//! two explicit triggers (`run_search`, `apply_filters`); control state
//! changes on their own never recompute anything.

pub mod error;
pub mod filter;
pub mod models;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use txndesk_seed::{SeedRecord, SeedSource, SeedUser};

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use filter::{matches_search, FilterCriteria, FilterField, ALL};
pub use models::{resolve_user, Record, RecordStatus, RecordType, UserEntry, BRANCHES, UNKNOWN_USER};

/// Seed source reference type
pub type SeedRef = Arc<dyn SeedSource>;

/// Main record store
pub struct RecordStore {
    source: SeedRef,
    data: RwLock<StoreData>,
}

/// In-memory store state
#[derive(Debug, Default)]
struct StoreData {
    records: Vec<Record>,
    visible: Vec<Record>,
    search_term: String,
    criteria: FilterCriteria,
    users: Vec<UserEntry>,
}

/// Response envelope for record listings
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<Record>,
    pub total_count: usize,
}

/// Store summary for the dashboard/API
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSummary {
    pub total_records: usize,
    pub visible_records: usize,
    pub branches: Vec<String>,
}

impl RecordStore {
    /// Create a new store over a seed source
    pub fn new(source: SeedRef) -> Self {
        Self {
            source,
            data: RwLock::new(StoreData::default()),
        }
    }

    // ==================== Lifecycle ====================

    /// (Re)populate the store from the seed source
    ///
    /// Resets the search term and criteria to their defaults and the
    /// visible subset to the full set.
    pub async fn load(&self) -> CoreResult<()> {
        let seed = self.source.load().await?;
        let records: Vec<Record> = seed
            .records
            .iter()
            .map(Self::convert_record)
            .collect::<CoreResult<_>>()?;
        let users: Vec<UserEntry> = seed.users.iter().map(Self::convert_user).collect();

        let mut data = self.data.write().unwrap();
        data.visible = records.clone();
        data.records = records;
        data.users = users;
        data.search_term = String::new();
        data.criteria = FilterCriteria::default();
        log::info!(
            "seeded {} records, {} directory entries",
            data.records.len(),
            data.users.len()
        );
        Ok(())
    }

    /// Reload the store from its seed source
    pub async fn reload(&self) -> CoreResult<()> {
        self.load().await
    }

    /// Convert a raw seed record into a typed record
    fn convert_record(raw: &SeedRecord) -> CoreResult<Record> {
        let record_type = raw
            .record_type
            .parse::<RecordType>()
            .map_err(|e| CoreError::InvalidFormat { message: e })?;
        let status = raw
            .status
            .parse::<RecordStatus>()
            .map_err(|e| CoreError::InvalidFormat { message: e })?;
        Ok(Record {
            id: raw.id.clone(),
            date: raw.date.clone(),
            branch: raw.branch.clone(),
            record_type,
            amount: raw.amount,
            bank: raw.bank.clone(),
            requested_by: raw.requested_by.clone(),
            status,
        })
    }

    fn convert_user(raw: &SeedUser) -> UserEntry {
        UserEntry {
            code: raw.code.clone(),
            name: raw.name.clone(),
        }
    }

    // ==================== Control State ====================

    /// Replace the pending search term; does not recompute
    pub fn set_search_term(&self, term: &str) {
        let mut data = self.data.write().unwrap();
        data.search_term = term.to_string();
    }

    /// Get the pending search term
    pub fn search_term(&self) -> String {
        self.data.read().unwrap().search_term.clone()
    }

    /// Update one criterion field; does not recompute
    pub fn set_filter_field(&self, field: FilterField, value: &str) {
        let mut data = self.data.write().unwrap();
        match field {
            FilterField::DateFrom => data.criteria.date_from = value.to_string(),
            FilterField::DateTo => data.criteria.date_to = value.to_string(),
            FilterField::Branch => data.criteria.branch = value.to_string(),
            FilterField::Type => data.criteria.record_type = value.to_string(),
            FilterField::Status => data.criteria.status = value.to_string(),
        }
    }

    /// Get the current criteria
    pub fn criteria(&self) -> FilterCriteria {
        self.data.read().unwrap().criteria.clone()
    }

    // ==================== Recompute Triggers ====================

    /// Recompute the visible subset using only the free-text predicate
    ///
    /// Any previously applied structured filtering is discarded; the
    /// computation always starts from the full record set.
    pub fn run_search(&self) {
        let mut data = self.data.write().unwrap();
        let term = data.search_term.clone();
        let visible: Vec<Record> = data
            .records
            .iter()
            .filter(|r| matches_search(r, &term))
            .cloned()
            .collect();
        log::debug!("search for {:?} matched {} records", term, visible.len());
        data.visible = visible;
    }

    /// Recompute the visible subset using only the structured criteria
    ///
    /// Any previous search result is discarded; the computation always
    /// starts from the full record set.
    pub fn apply_filters(&self) {
        let mut data = self.data.write().unwrap();
        let criteria = data.criteria.clone();
        let visible: Vec<Record> = data
            .records
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        log::debug!("filters matched {} records", visible.len());
        data.visible = visible;
    }

    // ==================== Mutation ====================

    /// Remove the record with the given id from both the full and visible
    /// sets; silent no-op when absent
    pub fn delete_record(&self, id: &str) {
        let mut data = self.data.write().unwrap();
        data.records.retain(|r| r.id != id);
        data.visible.retain(|r| r.id != id);
    }

    // ==================== Accessors ====================

    /// Get the currently visible records
    pub fn visible_records(&self) -> Vec<Record> {
        self.data.read().unwrap().visible.clone()
    }

    /// Get the full record set
    pub fn all_records(&self) -> Vec<Record> {
        self.data.read().unwrap().records.clone()
    }

    /// Get a record by id
    pub fn record(&self, id: &str) -> Option<Record> {
        let data = self.data.read().unwrap();
        data.records.iter().find(|r| r.id == id).cloned()
    }

    /// Number of currently visible records
    pub fn count(&self) -> usize {
        self.data.read().unwrap().visible.len()
    }

    /// Number of records in the full set
    pub fn records_count(&self) -> usize {
        self.data.read().unwrap().records.len()
    }

    /// Get the user directory
    pub fn users(&self) -> Vec<UserEntry> {
        self.data.read().unwrap().users.clone()
    }

    /// Resolve a requester code to a display name
    pub fn resolve_user(&self, code: &str) -> String {
        let data = self.data.read().unwrap();
        resolve_user(&data.users, code)
    }

    /// Get a store summary
    pub fn summary(&self) -> StoreSummary {
        let data = self.data.read().unwrap();
        StoreSummary {
            total_records: data.records.len(),
            visible_records: data.visible.len(),
            branches: BRANCHES.iter().map(|b| b.to_string()).collect(),
        }
    }
}

// ==================== Tests ====================
