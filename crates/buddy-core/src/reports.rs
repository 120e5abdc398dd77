//! Report assembly
//!
//! Combines analytics, projection and tips into the response shapes served
//! to clients. Monetary figures are rounded to 2 decimals here and nowhere
//! else.

use rand::Rng;

use crate::analytics::Analytics;
use crate::error::{Error, Result};
use crate::models::{SummaryReport, TipsReport, MASCOT_NAME};
use crate::projection::{validate_income, Projection};
use crate::store::Snapshot;
use crate::tips::{pick_encouragement, TipContext, TipEngine};

/// Round a monetary value to 2 decimal places.
///
/// Rounds the exact binary value with ties to even, so `10.125` becomes
/// `10.12` and `2.675` (stored just below the tie) becomes `2.67`.
pub fn round2(value: f64) -> f64 {
    // Float formatting is exact and rounds half to even; scaling by 100 first is not
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn ensure_data(snapshot: &Snapshot, what: &str) -> Result<()> {
    if snapshot.is_empty() {
        return Err(Error::NoData(format!(
            "No transaction data available to generate {}.",
            what
        )));
    }
    Ok(())
}

/// Build the dashboard summary for a monthly income
pub fn build_summary(snapshot: &Snapshot, monthly_income: f64) -> Result<SummaryReport> {
    validate_income(monthly_income)?;
    ensure_data(snapshot, "a summary")?;

    let analytics = Analytics::calculate(snapshot.transactions());
    let projection = Projection::calculate(
        analytics.total_spend,
        analytics.period_days,
        monthly_income,
    )?;

    Ok(SummaryReport {
        mascot_name: MASCOT_NAME.to_string(),
        total_spend: round2(analytics.total_spend),
        total_income: round2(analytics.total_income),
        net_flow: round2(analytics.net_flow()),
        spend_by_category: analytics.spend_by_category.map_values(round2),
        monthly_burn_rate_projection: round2(projection.monthly_burn_rate_projection),
        money_left_from_income: round2(projection.money_left_from_income),
        days_until_broke_projection: projection.days_until_broke_projection,
        period_days: analytics.period_days,
    })
}

/// Build tips using the thread-local RNG
pub fn build_tips(snapshot: &Snapshot) -> Result<TipsReport> {
    build_tips_with_rng(snapshot, &mut rand::thread_rng())
}

/// Build tips with a caller-supplied RNG for the encouragement pick
pub fn build_tips_with_rng<R: Rng>(snapshot: &Snapshot, rng: &mut R) -> Result<TipsReport> {
    ensure_data(snapshot, "tips")?;

    let analytics = Analytics::calculate(snapshot.transactions());
    let ctx = TipContext::new(&analytics.spend_by_category, snapshot.len());
    let tips = TipEngine::new().generate(&ctx);

    Ok(TipsReport {
        mascot_name: MASCOT_NAME.to_string(),
        daily_dopamine_boost: pick_encouragement(rng).to_string(),
        personalized_tips: tips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::tips::ENCOURAGEMENTS;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn txn(date: &str, kind: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: category.to_string(),
            amount,
            txn_type: kind.to_string(),
            category: category.to_string(),
            payment_method: "Card".to_string(),
        }
    }

    fn reference_snapshot() -> Snapshot {
        Snapshot::new(vec![
            txn("2024-01-01", "debit", 100.0, "Food Delivery"),
            txn("2024-01-05", "credit", 5000.0, "Salary"),
        ])
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-3.336), -3.34);
        assert_eq!(round2(600.0), 600.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        assert_eq!(round2(10.125), 10.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-10.125), -10.12);
        // Binary value sits just under the decimal tie
        assert_eq!(round2(2.675), 2.67);
    }

    #[test]
    fn test_summary_reference_scenario() {
        let summary = build_summary(&reference_snapshot(), 6000.0).unwrap();

        assert_eq!(summary.mascot_name, "Mochi the Fox");
        assert_eq!(summary.total_spend, 100.0);
        assert_eq!(summary.total_income, 5000.0);
        assert_eq!(summary.net_flow, 4900.0);
        assert_eq!(summary.period_days, 5);
        assert_eq!(summary.monthly_burn_rate_projection, 600.0);
        assert_eq!(summary.money_left_from_income, 5900.0);
        assert_eq!(summary.days_until_broke_projection, Some(295));
        assert_eq!(summary.spend_by_category["Food Delivery"], 100.0);
    }

    #[test]
    fn test_summary_rounds_at_boundary() {
        let snapshot = Snapshot::new(vec![
            txn("2024-01-01", "debit", 10.0, "Coffee"),
            txn("2024-01-03", "debit", 0.333, "Coffee"),
        ]);
        let summary = build_summary(&snapshot, 1000.0).unwrap();

        assert_eq!(summary.total_spend, 10.33);
        assert_eq!(summary.spend_by_category["Coffee"], 10.33);
        // 10.333 / 3 * 30 = 103.33
        assert_eq!(summary.monthly_burn_rate_projection, 103.33);
        // 989.667 left at 3.444 a day, floored from unrounded values
        assert_eq!(summary.days_until_broke_projection, Some(287));
    }

    #[test]
    fn test_summary_empty_is_no_data() {
        let result = build_summary(&Snapshot::empty(), 6000.0);
        assert!(matches!(result, Err(Error::NoData(_))));
    }

    #[test]
    fn test_summary_zero_income_is_invalid_regardless_of_data() {
        let result = build_summary(&reference_snapshot(), 0.0);
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let result = build_summary(&Snapshot::empty(), 0.0);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_tips_empty_is_no_data() {
        let result = build_tips(&Snapshot::empty());
        assert!(matches!(result, Err(Error::NoData(_))));
    }

    #[test]
    fn test_tips_reference_scenario() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = build_tips_with_rng(&reference_snapshot(), &mut rng).unwrap();

        assert_eq!(report.mascot_name, "Mochi the Fox");
        assert!(ENCOURAGEMENTS.contains(&report.daily_dopamine_boost.as_str()));
        let titles: Vec<&str> = report
            .personalized_tips
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Level-Up Your Kitchen Game!", "Check Your Subscriptions"]
        );
    }

    #[test]
    fn test_tips_sutta_uses_total_transaction_count() {
        // 300 of sutta across 10 transactions of any type => 675
        let mut txns: Vec<Transaction> = (1..=5)
            .map(|d| txn(&format!("2024-01-0{}", d), "debit", 60.0, "Sutta"))
            .collect();
        txns.extend((1..=5).map(|d| txn(&format!("2024-01-0{}", d), "credit", 1.0, "Refund")));

        let report = build_tips(&Snapshot::new(txns)).unwrap();
        let sutta = report
            .personalized_tips
            .iter()
            .find(|t| t.title == "Power-Up Your Health & Wallet")
            .unwrap();
        assert!(sutta.suggestion.contains("₹675 a month"));
    }
}
