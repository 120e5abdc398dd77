//! Finance Buddy Core Library
//!
//! Read-only spending reports over a fixed transaction snapshot:
//! - Snapshot loading with an empty fallback
//! - Analytics (totals, spend by category, observed period)
//! - Burn rate and runway projection
//! - Rule-based savings tips and a random encouragement
//! - Report assembly for the HTTP and CLI surfaces

pub mod analytics;
pub mod error;
pub mod models;
pub mod projection;
pub mod reports;
pub mod store;
pub mod tips;

pub use analytics::Analytics;
pub use error::{Error, Result};
pub use models::{CategorySpend, SummaryReport, Tip, TipsReport, Transaction, TransactionType};
pub use projection::Projection;
pub use reports::{build_summary, build_tips, build_tips_with_rng};
pub use store::{Snapshot, DEFAULT_FIXTURE};
pub use tips::{TipContext, TipEngine, TipRule};
