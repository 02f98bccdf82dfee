//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction,
        payload::{TransactionPayload, lookup_id, read_payload},
        state::{TransactionState, internal_error},
    },
};

const DELETE_FAILED: &str = "Failed to delete transaction";

/// The message sent back after a transaction has been deleted.
pub const DELETED_MESSAGE: &str = "Transaction deleted successfully";

/// The response body for a successful delete.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeletedTransaction {
    /// A confirmation message.
    pub message: String,
    /// The transaction that was removed.
    pub transaction: Transaction,
}

/// A route handler for deleting a transaction, responds with the removed
/// transaction.
///
/// Deletion is permanent.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<DeletedTransaction>, Error> {
    let id = read_payload(body)?.require_id()?;
    let id = lookup_id(&id)?;

    let mut store = state.lock_store(DELETE_FAILED)?;
    let transaction = store.remove(id).map_err(internal_error(DELETE_FAILED))?;

    tracing::info!("Deleted transaction {id}");

    Ok(Json(DeletedTransaction {
        message: DELETED_MESSAGE.to_owned(),
        transaction,
    }))
}
