//! The state shared by the transaction endpoints.

use std::sync::MutexGuard;

use axum::extract::FromRef;

use crate::{
    AppState, Error,
    stores::{SharedTransactionStore, TransactionStore},
};

/// The state needed to read or change transactions.
#[derive(Clone)]
pub struct TransactionState {
    /// The store holding every transaction.
    pub transaction_store: SharedTransactionStore,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

impl TransactionState {
    /// Lock the store for the duration of one request.
    ///
    /// # Errors
    /// Returns [Error::Internal] with `failure_message` if the lock is poisoned.
    pub fn lock_store(
        &self,
        failure_message: &'static str,
    ) -> Result<MutexGuard<'_, dyn TransactionStore + Send + 'static>, Error> {
        self.transaction_store.lock().map_err(|error| {
            tracing::error!("could not acquire the transaction store lock: {error}");
            Error::Internal(failure_message)
        })
    }
}

/// Map store errors other than [Error::NotFound] to an [Error::Internal]
/// carrying `failure_message`, logging the original error.
pub(crate) fn internal_error(failure_message: &'static str) -> impl FnOnce(Error) -> Error {
    move |error| match error {
        Error::NotFound => Error::NotFound,
        error => {
            tracing::error!("{failure_message}: {error}");
            Error::Internal(failure_message)
        }
    }
}
