//! Report command implementations

use anyhow::{Context, Result};
use buddy_core::{build_summary, build_tips, Snapshot, SummaryReport, TipsReport};

pub fn cmd_summary(snapshot: &Snapshot, income: f64, json: bool) -> Result<()> {
    let summary = build_summary(snapshot, income).context("Failed to build summary")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}

pub fn cmd_tips(snapshot: &Snapshot, json: bool) -> Result<()> {
    let report = build_tips(snapshot).context("Failed to build tips")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_tips(&report));
    }

    Ok(())
}

/// Format a summary as the terminal dashboard
pub fn render_summary(summary: &SummaryReport) -> String {
    let mut lines = vec![
        String::new(),
        format!("📊 Spending Summary ({})", summary.mascot_name),
        format!("   Period: {} days", summary.period_days),
        "   ─────────────────────────────────────────────".to_string(),
        format!("   Total spend:     ₹{:.2}", summary.total_spend),
        format!("   Total income:    ₹{:.2}", summary.total_income),
        format!("   Net flow:        ₹{:.2}", summary.net_flow),
        String::new(),
        format!(
            "   Burn rate:       ₹{:.2}/month",
            summary.monthly_burn_rate_projection
        ),
        format!("   Left from income: ₹{:.2}", summary.money_left_from_income),
    ];

    lines.push(match summary.days_until_broke_projection {
        Some(0) => "   Runway:          already spent 😬".to_string(),
        Some(days) => format!("   Runway:          {} days", days),
        None => "   Runway:          no spending yet".to_string(),
    });

    if !summary.spend_by_category.is_empty() {
        lines.push(String::new());
        lines.push(format!("   {:20} │ {:>10}", "Category", "Spend"));
        lines.push("   ─────────────────────┼───────────".to_string());
        for (category, amount) in summary.spend_by_category.ranked() {
            lines.push(format!("   {:20} │ {:>10.2}", category, amount));
        }
    }

    lines.join("\n")
}

/// Format the encouragement and tips for the terminal
pub fn render_tips(report: &TipsReport) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "🦊 {} says: {}",
            report.mascot_name, report.daily_dopamine_boost
        ),
        String::new(),
    ];

    for tip in &report.personalized_tips {
        lines.push(format!("   {} {}", tip.emoji, tip.title));
        lines.push(format!("      {}", tip.suggestion));
    }

    lines.join("\n")
}
