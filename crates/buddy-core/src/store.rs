//! Transaction snapshot
//!
//! The snapshot is loaded once at startup and shared read-only for the life
//! of the process. A missing or malformed fixture is not fatal: the service
//! starts empty and every report answers with a no-data error instead.

use std::path::Path;

use tracing::{error, info, warn};

use crate::error::Result;
use crate::models::Transaction;

/// Default fixture file, relative to the working directory
pub const DEFAULT_FIXTURE: &str = "mock_transactions.json";

/// Immutable, load-once collection of transactions
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    transactions: Vec<Transaction>,
}

impl Snapshot {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse a JSON array of transactions
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let transactions: Vec<Transaction> = serde_json::from_str(&raw)?;
        Ok(Self::new(transactions))
    }

    /// Load the fixture, falling back to an empty snapshot on any failure
    pub fn load_or_empty(path: &Path) -> Self {
        info!(path = %path.display(), "Loading transaction data");

        if !path.exists() {
            warn!(
                path = %path.display(),
                "Transaction fixture not found, running with no data"
            );
            return Self::empty();
        }

        match Self::load(path) {
            Ok(snapshot) => {
                info!(count = snapshot.len(), "Loaded transactions");
                snapshot
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load or parse transaction fixture, running with no data"
                );
                Self::empty()
            }
        }
    }

    /// All transactions in load order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"[
        {"date":"2024-01-01","description":"Zomato","amount":100.0,"type":"debit","category":"Food Delivery","payment_method":"UPI"},
        {"date":"2024-01-05","description":"Salary","amount":5000.0,"type":"credit","category":"Salary","payment_method":"Bank Transfer"}
    ]"#;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order() {
        let file = write_fixture(FIXTURE);
        let snapshot = Snapshot::load(file.path()).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.transactions()[0].description, "Zomato");
        assert_eq!(snapshot.transactions()[1].description, "Salary");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_malformed_is_json_error() {
        let file = write_fixture("{ not json");
        let result = Snapshot::load(file.path());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_or_empty_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::load_or_empty(&dir.path().join("mock_transactions.json"));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_load_or_empty_falls_back_on_bad_record() {
        // Second record has no payment_method, so the whole fixture is rejected
        let file = write_fixture(
            r#"[
            {"date":"2024-01-01","description":"a","amount":1.0,"type":"debit","category":"X","payment_method":"UPI"},
            {"date":"2024-01-02","description":"b","amount":2.0,"type":"debit","category":"X"}
        ]"#,
        );
        let snapshot = Snapshot::load_or_empty(file.path());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_bundled_fixture_parses() {
        let raw = include_str!("../../../mock_transactions.json");
        let transactions: Vec<Transaction> = serde_json::from_str(raw).unwrap();
        assert!(!transactions.is_empty());
        assert!(transactions.iter().all(|t| t.kind().is_some()));
    }

    #[test]
    fn test_load_or_empty_loads_valid_fixture() {
        let file = write_fixture(FIXTURE);
        let snapshot = Snapshot::load_or_empty(file.path());
        assert_eq!(snapshot.len(), 2);
    }
}
