//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::{AppError, AppState};
use buddy_core::{build_summary, build_tips, SummaryReport, TipsReport};

/// Query parameters for the summary report
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// User's total monthly income, must be greater than 0
    pub monthly_income: Option<String>,
}

/// GET /summary - Totals, category breakdown, burn rate and runway
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<SummaryReport>, AppError> {
    let monthly_income: f64 = params
        .monthly_income
        .as_deref()
        .ok_or_else(|| AppError::bad_request("monthly_income is required"))?
        .trim()
        .parse()
        .map_err(|_| AppError::bad_request("monthly_income must be a number"))?;

    let summary = build_summary(&state.snapshot, monthly_income)?;

    debug!(
        monthly_income,
        period_days = summary.period_days,
        categories = summary.spend_by_category.len(),
        "Built summary"
    );

    Ok(Json(summary))
}

/// GET /tips - Savings tips and a daily encouragement
pub async fn get_tips(State(state): State<Arc<AppState>>) -> Result<Json<TipsReport>, AppError> {
    let report = build_tips(&state.snapshot)?;

    debug!(tips = report.personalized_tips.len(), "Built tips");

    Ok(Json(report))
}
