//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `reports` - Summary and tips commands
//! - `serve` - Web server command
//! - `transactions` - Transaction listing

pub mod reports;
pub mod serve;
pub mod transactions;

use std::path::Path;

use buddy_core::Snapshot;

// Re-export command functions for main.rs
pub use reports::*;
pub use serve::*;
pub use transactions::*;

/// Load the transaction snapshot, falling back to empty on any failure
pub fn open_snapshot(data_path: &Path) -> Snapshot {
    Snapshot::load_or_empty(data_path)
}

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
