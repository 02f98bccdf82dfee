//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::stores::{SharedTransactionStore, TransactionStore};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store holding every transaction.
    pub transaction_store: SharedTransactionStore,
}

impl AppState {
    /// Create a new [AppState] that owns `transaction_store`.
    ///
    /// The store lives as long as the last clone of the state, i.e. until the
    /// server shuts down.
    pub fn new(transaction_store: impl TransactionStore + Send + 'static) -> Self {
        Self {
            transaction_store: Arc::new(Mutex::new(transaction_store)),
        }
    }
}
