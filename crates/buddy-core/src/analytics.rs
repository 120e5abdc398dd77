//! Aggregate statistics over a transaction list

use chrono::NaiveDate;

use crate::models::{CategorySpend, Transaction, TransactionType};

/// Totals, per-category debit spend, and the observed date span
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analytics {
    /// Sum of debit amounts
    pub total_spend: f64,
    /// Sum of credit amounts
    pub total_income: f64,
    /// Debit spend per category in first-seen order. Categories with no
    /// debits are absent.
    pub spend_by_category: CategorySpend,
    /// Inclusive day count between the earliest and latest dates, 0 when empty
    pub period_days: i64,
}

impl Analytics {
    /// Compute analytics in a single pass. An empty list yields all zeros.
    pub fn calculate(transactions: &[Transaction]) -> Self {
        let mut analytics = Self::default();

        let mut first: Option<NaiveDate> = None;
        let mut last: Option<NaiveDate> = None;

        for txn in transactions {
            match txn.kind() {
                Some(TransactionType::Debit) => {
                    analytics.total_spend += txn.amount;
                    analytics.spend_by_category.add(&txn.category, txn.amount);
                }
                Some(TransactionType::Credit) => analytics.total_income += txn.amount,
                None => {}
            }

            // Every record counts toward the span, whatever its type
            first = Some(first.map_or(txn.date, |d| d.min(txn.date)));
            last = Some(last.map_or(txn.date, |d| d.max(txn.date)));
        }

        if let (Some(first), Some(last)) = (first, last) {
            analytics.period_days = (last - first).num_days() + 1;
        }

        analytics
    }

    /// Income minus spend
    pub fn net_flow(&self) -> f64 {
        self.total_income - self.total_spend
    }

    /// Categories ranked by spend, highest first. Ties keep first-seen order.
    pub fn ranked_categories(&self) -> Vec<(&str, f64)> {
        self.spend_by_category.ranked()
    }
}
