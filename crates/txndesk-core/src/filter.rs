//! Pure filtering predicates for the record browser
//!
//! Two independent ways of deriving the visible subset exist: the free-text
//! search predicate and the structured criteria conjunction. They are never
//! combined; each recomputes from the full record set.

use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no constraint" for enumerated criteria
pub const ALL: &str = "ALL";

/// Free-text search predicate
///
/// True iff `term` is a substring (case-sensitive, as typed) of the record
/// id, of the type label, or of the status label. The empty term matches
/// every record. Branch, date, amount, bank and requester are never
/// inspected.
pub fn matches_search(record: &Record, term: &str) -> bool {
    record.id.contains(term)
        || record.record_type.as_str().contains(term)
        || record.status.as_str().contains(term)
}

/// Named criterion fields, evaluated in a fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    DateFrom,
    DateTo,
    Branch,
    Type,
    Status,
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterField::DateFrom => write!(f, "from"),
            FilterField::DateTo => write!(f, "to"),
            FilterField::Branch => write!(f, "branch"),
            FilterField::Type => write!(f, "type"),
            FilterField::Status => write!(f, "status"),
        }
    }
}

/// Structured filter criteria, as bound to the filter controls
///
/// Values are kept as raw strings; `""` and the literal `"ALL"` mean the
/// criterion is unset and always satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub date_from: String,
    pub date_to: String,
    pub branch: String,
    pub record_type: String,
    pub status: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            date_from: String::new(),
            date_to: String::new(),
            branch: ALL.to_string(),
            record_type: ALL.to_string(),
            status: ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    /// Equality checks, in the order they are evaluated
    const EQUALITY_ORDER: [FilterField; 3] =
        [FilterField::Branch, FilterField::Type, FilterField::Status];

    /// True when every criterion is at its "no constraint" value
    pub fn is_unconstrained(&self) -> bool {
        self.date_from.is_empty()
            && self.date_to.is_empty()
            && Self::is_unset(&self.branch)
            && Self::is_unset(&self.record_type)
            && Self::is_unset(&self.status)
    }

    /// Conjunction over the criterion set
    ///
    /// Equality checks run first in a fixed order, then the date range. An
    /// unset criterion is skipped. With everything unset this returns true
    /// for every record.
    pub fn matches(&self, record: &Record) -> bool {
        for field in Self::EQUALITY_ORDER {
            if !self.equality_matches(field, record) {
                return false;
            }
        }
        self.date_range_matches(record)
    }

    fn is_unset(value: &str) -> bool {
        value.is_empty() || value == ALL
    }

    fn equality_matches(&self, field: FilterField, record: &Record) -> bool {
        let (criterion, actual) = match field {
            FilterField::Branch => (&self.branch, record.branch.as_str()),
            FilterField::Type => (&self.record_type, record.record_type.as_str()),
            FilterField::Status => (&self.status, record.status.as_str()),
            // Date bounds are handled together as a range check
            FilterField::DateFrom | FilterField::DateTo => return true,
        };
        if Self::is_unset(criterion) {
            return true;
        }
        criterion == actual
    }

    /// The range participates only when both bounds are set; comparison is
    /// lexicographic, which matches chronological order for the fixed-width
    /// date format
    fn date_range_matches(&self, record: &Record) -> bool {
        if self.date_from.is_empty() || self.date_to.is_empty() {
            return true;
        }
        self.date_from.as_str() <= record.date.as_str()
            && record.date.as_str() <= self.date_to.as_str()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordStatus, RecordType};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(id: &str, date: &str, branch: &str, rt: RecordType, status: RecordStatus) -> Record {
        Record {
            id: id.to_string(),
            date: date.to_string(),
            branch: branch.to_string(),
            record_type: rt,
            amount: Decimal::from_str("1000.00").unwrap(),
            bank: "HDFC Bank".to_string(),
            requested_by: "A123".to_string(),
            status,
        }
    }

    #[test]
    fn test_search_matches_id_substring() {
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(matches_search(&r, "TXN1001"));
        assert!(matches_search(&r, "1001"));
        assert!(matches_search(&r, "TXN"));
        assert!(!matches_search(&r, "TXN2"));
    }

    #[test]
    fn test_search_matches_type_and_status() {
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(matches_search(&r, "Full"));
        assert!(matches_search(&r, "Pend"));
        assert!(!matches_search(&r, "Short"));
        assert!(!matches_search(&r, "Approved"));
    }

    #[test]
    fn test_search_empty_term_matches_all() {
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(matches_search(&r, ""));
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(!matches_search(&r, "full"));
        assert!(!matches_search(&r, "txn"));
    }

    #[test]
    fn test_search_never_inspects_other_fields() {
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(!matches_search(&r, "Mumbai"));
        assert!(!matches_search(&r, "2024"));
        assert!(!matches_search(&r, "HDFC"));
        assert!(!matches_search(&r, "A123"));
    }

    #[test]
    fn test_default_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        let r = record("TXN1001", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(criteria.matches(&r));
    }

    #[test]
    fn test_single_field_branch() {
        let criteria = FilterCriteria {
            branch: "Mumbai".to_string(),
            ..Default::default()
        };
        let hit = record("TXN1", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let miss = record("TXN2", "2024-01-05", "Thane", RecordType::Full, RecordStatus::Pending);
        assert!(criteria.matches(&hit));
        assert!(!criteria.matches(&miss));
    }

    #[test]
    fn test_single_field_type_and_status() {
        let criteria = FilterCriteria {
            record_type: "Short".to_string(),
            ..Default::default()
        };
        let hit = record("TXN1", "2024-01-05", "Mumbai", RecordType::Short, RecordStatus::Pending);
        let miss = record("TXN2", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(criteria.matches(&hit));
        assert!(!criteria.matches(&miss));

        let criteria = FilterCriteria {
            status: "Rejected".to_string(),
            ..Default::default()
        };
        let hit = record("TXN3", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Rejected);
        assert!(criteria.matches(&hit));
        assert!(!criteria.matches(&miss));
    }

    #[test]
    fn test_equality_is_exact() {
        let criteria = FilterCriteria {
            branch: "Mumbai".to_string(),
            ..Default::default()
        };
        // "Navi Mumbai" contains "Mumbai" but is not equal to it
        let miss = record("TXN1", "2024-01-05", "Navi Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(!criteria.matches(&miss));
    }

    #[test]
    fn test_conjunction_over_fields() {
        let criteria = FilterCriteria {
            branch: "Mumbai".to_string(),
            status: "Approved".to_string(),
            ..Default::default()
        };
        let hit = record("TXN1", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Approved);
        let wrong_status = record("TXN2", "2024-01-05", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let wrong_branch = record("TXN3", "2024-01-05", "Thane", RecordType::Full, RecordStatus::Approved);
        assert!(criteria.matches(&hit));
        assert!(!criteria.matches(&wrong_status));
        assert!(!criteria.matches(&wrong_branch));
    }

    #[test]
    fn test_date_range_inclusive_bounds() {
        let criteria = FilterCriteria {
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            ..Default::default()
        };
        let inside = record("TXN1", "2024-01-15", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let on_from = record("TXN2", "2024-01-01", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let on_to = record("TXN3", "2024-01-31", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let after = record("TXN4", "2024-02-01", "Mumbai", RecordType::Full, RecordStatus::Pending);
        let before = record("TXN5", "2023-12-31", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(criteria.matches(&inside));
        assert!(criteria.matches(&on_from));
        assert!(criteria.matches(&on_to));
        assert!(!criteria.matches(&after));
        assert!(!criteria.matches(&before));
    }

    #[test]
    fn test_date_range_requires_both_bounds() {
        let only_from = FilterCriteria {
            date_from: "2024-01-01".to_string(),
            ..Default::default()
        };
        let only_to = FilterCriteria {
            date_to: "2024-01-31".to_string(),
            ..Default::default()
        };
        // Outside the would-be range, but the check is skipped entirely
        let r = record("TXN1", "2025-06-01", "Mumbai", RecordType::Full, RecordStatus::Pending);
        assert!(only_from.matches(&r));
        assert!(only_to.matches(&r));
    }

    #[test]
    fn test_all_literal_is_skipped() {
        let criteria = FilterCriteria {
            branch: ALL.to_string(),
            record_type: ALL.to_string(),
            status: ALL.to_string(),
            ..Default::default()
        };
        let r = record("TXN1", "2024-01-05", "Byculla", RecordType::Short, RecordStatus::Rejected);
        assert!(criteria.matches(&r));
    }
}
