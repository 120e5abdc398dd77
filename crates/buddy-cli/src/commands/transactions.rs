//! Transaction command implementations

use anyhow::Result;
use buddy_core::{Snapshot, Transaction};

use super::truncate;

pub fn cmd_transactions_list(snapshot: &Snapshot, limit: Option<usize>, json: bool) -> Result<()> {
    let shown = &snapshot.transactions()[..limit.unwrap_or(usize::MAX).min(snapshot.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        println!("{}", render_transactions(shown, snapshot.len()));
    }

    Ok(())
}

/// Format a slice of transactions as a table, noting when it is a prefix of
/// `total` records
pub fn render_transactions(shown: &[Transaction], total: usize) -> String {
    if shown.is_empty() {
        return "No transactions loaded.".to_string();
    }

    let mut lines = vec![
        format!(
            "{:10} │ {:30} │ {:>10} │ {:6} │ {:15} │ {}",
            "Date", "Description", "Amount", "Type", "Category", "Payment"
        ),
        "───────────┼────────────────────────────────┼────────────┼────────┼─────────────────┼──────────"
            .to_string(),
    ];

    for txn in shown {
        lines.push(format!(
            "{:10} │ {:30} │ {:>10.2} │ {:6} │ {:15} │ {}",
            txn.date,
            truncate(&txn.description, 30),
            txn.amount,
            txn.txn_type,
            truncate(&txn.category, 15),
            txn.payment_method
        ));
    }

    if shown.len() < total {
        lines.push(String::new());
        lines.push(format!("Showing {} of {} transactions", shown.len(), total));
    }

    lines.join("\n")
}
