//! Defines the transaction store trait.

use std::sync::{Arc, Mutex};

use time::OffsetDateTime;

use crate::{
    Error,
    transaction::{Transaction, TransactionFields, TransactionId},
};

/// Handles the creation, retrieval, update and removal of transactions.
///
/// Implementations must never reuse an ID, even after the transaction that
/// held it has been removed.
pub trait TransactionStore {
    /// Retrieve all transactions in the order they were inserted.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a single transaction.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Store a new transaction, assigning it a fresh ID.
    fn insert(
        &mut self,
        fields: TransactionFields,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, Error>;

    /// Overwrite the editable fields of a transaction, keeping its ID and
    /// creation time.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction.
    fn replace(
        &mut self,
        id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, Error>;

    /// Remove a transaction and return it.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction.
    fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error>;

    /// The number of stored transactions.
    fn len(&self) -> Result<usize, Error>;

    /// Whether the store holds no transactions.
    fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.len()? == 0)
    }
}

/// A transaction store shared between request handlers.
pub type SharedTransactionStore = Arc<Mutex<dyn TransactionStore + Send>>;
