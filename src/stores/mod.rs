//! Contains traits and implementations for objects that store [transactions](crate::transaction).

mod memory;
mod transaction;

pub use memory::InMemoryTransactionStore;
pub use transaction::{SharedTransactionStore, TransactionStore};
