//! Burn rate and runway projection
//!
//! Scales the observed daily spend to a 30-day month and estimates how many
//! days a monthly income lasts at that rate.

use crate::error::{Error, Result};

/// Days used to scale a daily rate to a month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Spending projection, unrounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub daily_spend_rate: f64,
    pub monthly_burn_rate_projection: f64,
    pub money_left_from_income: f64,
    /// `None` unless the daily spend rate is positive; `Some(0)` when the
    /// income is already used up
    pub days_until_broke_projection: Option<i64>,
}

impl Projection {
    /// Project spending against a monthly income.
    ///
    /// Fails with [`Error::InvalidInput`] unless `monthly_income` is a finite,
    /// strictly positive number.
    pub fn calculate(total_spend: f64, period_days: i64, monthly_income: f64) -> Result<Self> {
        validate_income(monthly_income)?;

        let daily_spend_rate = if period_days > 0 {
            total_spend / period_days as f64
        } else {
            0.0
        };
        let monthly_burn_rate_projection = daily_spend_rate * DAYS_PER_MONTH;
        let money_left_from_income = monthly_income - total_spend;

        // Refund-heavy data can leave a negative net spend; no runway then
        let days_until_broke_projection = if daily_spend_rate <= 0.0 {
            None
        } else if money_left_from_income <= 0.0 {
            Some(0)
        } else {
            Some((money_left_from_income / daily_spend_rate).floor() as i64)
        };

        Ok(Self {
            daily_spend_rate,
            monthly_burn_rate_projection,
            money_left_from_income,
            days_until_broke_projection,
        })
    }
}

/// Reject a monthly income that is not strictly positive
pub fn validate_income(monthly_income: f64) -> Result<()> {
    if monthly_income.is_finite() && monthly_income > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "monthly_income must be greater than 0 (got {})",
            monthly_income
        )))
    }
}
