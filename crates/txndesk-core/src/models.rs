//! Record model and the static user directory

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed set of branch labels records may carry
pub const BRANCHES: [&str; 8] = [
    "Thane",
    "Navi Mumbai",
    "Mumbai",
    "Kurla",
    "Vile Parle",
    "Lower Parel",
    "Andheri",
    "Byculla",
];

/// Sentinel shown when a requester code has no directory entry
pub const UNKNOWN_USER: &str = "Unknown User";

/// Record type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    /// Full settlement request
    Full,
    /// Short settlement request
    Short,
}

impl RecordType {
    /// Canonical string form, as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Full => "Full",
            RecordType::Short => "Short",
        }
    }
}

impl std::str::FromStr for RecordType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(RecordType::Full),
            "short" => Ok(RecordType::Short),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Awaiting a decision
    Pending,
    /// Approved by an administrator
    Approved,
    /// Rejected by an administrator
    Rejected,
}

impl RecordStatus {
    /// Canonical string form, as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RecordStatus::Pending),
            "approved" => Ok(RecordStatus::Approved),
            "rejected" => Ok(RecordStatus::Rejected),
            _ => Err(format!("Invalid record status: {}", s)),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One transaction record
///
/// Records are immutable once loaded; the only mutation the store performs
/// is removing one from the active set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique record identifier
    pub id: String,
    /// Calendar date, zero-padded year-first (YYYY-MM-DD) so lexicographic
    /// order equals chronological order
    pub date: String,
    /// Branch label
    pub branch: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Currency amount in rupees
    pub amount: Decimal,
    /// Free-text bank name
    pub bank: String,
    /// Code into the user directory
    pub requested_by: String,
    /// Record status
    pub status: RecordStatus,
}

impl Record {
    /// Get the record date as NaiveDate, for display-side use only
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// User directory entry (code -> name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub code: String,
    pub name: String,
}

/// Resolve a requester code against the directory
///
/// The directory may carry duplicate codes; the first entry in directory
/// order wins. A code with no entry resolves to the sentinel name.
pub fn resolve_user(directory: &[UserEntry], code: &str) -> String {
    directory
        .iter()
        .find(|u| u.code == code)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_type_from_str() {
        assert_eq!("Full".parse::<RecordType>().unwrap(), RecordType::Full);
        assert_eq!("short".parse::<RecordType>().unwrap(), RecordType::Short);
        assert!("Partial".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_record_status_from_str() {
        assert_eq!(
            "Pending".parse::<RecordStatus>().unwrap(),
            RecordStatus::Pending
        );
        assert_eq!(
            "approved".parse::<RecordStatus>().unwrap(),
            RecordStatus::Approved
        );
        assert!("Done".parse::<RecordStatus>().is_err());
    }

    #[test]
    fn test_canonical_string_forms() {
        assert_eq!(RecordType::Full.to_string(), "Full");
        assert_eq!(RecordStatus::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_record_date_naive() {
        let record = Record {
            id: "TXN9000".to_string(),
            date: "2024-06-15".to_string(),
            branch: "Mumbai".to_string(),
            record_type: RecordType::Full,
            amount: Decimal::from_str("100.00").unwrap(),
            bank: "HDFC Bank".to_string(),
            requested_by: "A123".to_string(),
            status: RecordStatus::Pending,
        };
        assert_eq!(
            record.date_naive(),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_resolve_user_first_match_wins() {
        let directory = vec![
            UserEntry {
                code: "A123".to_string(),
                name: "X".to_string(),
            },
            UserEntry {
                code: "A123".to_string(),
                name: "Y".to_string(),
            },
        ];
        assert_eq!(resolve_user(&directory, "A123"), "X");
    }

    #[test]
    fn test_resolve_user_unknown_code() {
        let directory = vec![UserEntry {
            code: "A123".to_string(),
            name: "X".to_string(),
        }];
        assert_eq!(resolve_user(&directory, "Z999"), UNKNOWN_USER);
    }

    #[test]
    fn test_resolve_user_exact_code_match_only() {
        let directory = vec![UserEntry {
            code: "A123".to_string(),
            name: "X".to_string(),
        }];
        assert_eq!(resolve_user(&directory, "A12"), UNKNOWN_USER);
        assert_eq!(resolve_user(&directory, "a123"), UNKNOWN_USER);
    }
}
