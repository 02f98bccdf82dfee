//! Defines the endpoint for listing transactions.

use axum::{Json, extract::State};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction, newest_first,
        state::{TransactionState, internal_error},
    },
};

const FETCH_FAILED: &str = "Failed to fetch transactions";

/// A route handler that responds with every transaction, newest date first.
///
/// Transactions with the same date stay in the order they were created.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let store = state.lock_store(FETCH_FAILED)?;
    let mut transactions = store.list().map_err(internal_error(FETCH_FAILED))?;

    // `sort_by` is stable, which keeps insertion order for equal dates.
    transactions.sort_by(newest_first);

    Ok(Json(transactions))
}
