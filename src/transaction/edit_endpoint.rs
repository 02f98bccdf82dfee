//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction,
        payload::{TransactionPayload, lookup_id, read_payload},
        state::{TransactionState, internal_error},
    },
};

const UPDATE_FAILED: &str = "Failed to update transaction";

/// A route handler for replacing the amount, description, date and type of
/// a transaction, responds with the updated transaction.
///
/// The ID is checked first, then the other fields, then whether the
/// transaction exists. The ID and creation time never change.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let payload = read_payload(body)?;
    let id = payload.require_id()?;
    let fields = payload.validate_fields()?;
    let id = lookup_id(&id)?;

    let mut store = state.lock_store(UPDATE_FAILED)?;
    let transaction = store
        .replace(id, fields)
        .map_err(internal_error(UPDATE_FAILED))?;

    tracing::info!("Updated transaction {id}");

    Ok(Json(transaction))
}
