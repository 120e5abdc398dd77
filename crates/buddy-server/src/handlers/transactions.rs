//! Transaction handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use buddy_core::Transaction;

/// GET /transactions - All transactions in load order
///
/// An empty snapshot is an empty list, not an error.
pub async fn list_transactions(State(state): State<Arc<AppState>>) -> Json<Vec<Transaction>> {
    Json(state.snapshot.transactions().to_vec())
}
