//! Implements a transaction store that keeps everything in memory.
//!
//! Nothing is persisted, the store starts over each time the server starts.

use time::{OffsetDateTime, Time};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction, TransactionFields, TransactionId, TransactionType, parse_calendar_date,
    },
};

/// Stores transactions in a `Vec` in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryTransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl InMemoryTransactionStore {
    /// Create an empty store whose first transaction will get the ID "1".
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: TransactionId::new(1),
        }
    }

    /// Create a store holding three example transactions with the IDs "1" to "3".
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        let samples = [
            (
                150.00,
                "Grocery shopping",
                "2024-01-15",
                TransactionType::Expense,
            ),
            (2500.00, "Salary", "2024-01-01", TransactionType::Income),
            (
                80.00,
                "Dinner with friends",
                "2024-01-10",
                TransactionType::Expense,
            ),
        ];

        for (amount, description, date, type_) in samples {
            let created_at = parse_calendar_date(date)
                .map(|date| date.with_time(Time::MIDNIGHT).assume_utc())
                .unwrap_or(OffsetDateTime::UNIX_EPOCH);

            store.push(
                TransactionFields::new_unchecked(amount, description, date, type_),
                created_at,
            );
        }

        store
    }

    fn push(&mut self, fields: TransactionFields, created_at: OffsetDateTime) -> Transaction {
        let id = self.next_id;
        self.next_id = id.next();

        let transaction = Transaction {
            id,
            amount: fields.amount,
            description: fields.description,
            date: fields.date,
            type_: fields.type_,
            created_at,
        };

        self.transactions.push(transaction.clone());

        transaction
    }

    fn position(&self, id: TransactionId) -> Result<usize, Error> {
        self.transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self.position(id)?;

        Ok(self.transactions[index].clone())
    }

    fn insert(
        &mut self,
        fields: TransactionFields,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        Ok(self.push(fields, created_at))
    }

    fn replace(
        &mut self,
        id: TransactionId,
        fields: TransactionFields,
    ) -> Result<Transaction, Error> {
        let index = self.position(id)?;
        let transaction = &mut self.transactions[index];

        transaction.amount = fields.amount;
        transaction.description = fields.description;
        transaction.date = fields.date;
        transaction.type_ = fields.type_;

        Ok(transaction.clone())
    }

    fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let index = self.position(id)?;

        Ok(self.transactions.remove(index))
    }

    fn len(&self) -> Result<usize, Error> {
        Ok(self.transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        Error,
        stores::TransactionStore,
        transaction::{TransactionFields, TransactionId, TransactionType},
    };

    use super::InMemoryTransactionStore;

    fn fields(amount: f64, description: &str) -> TransactionFields {
        TransactionFields::new_unchecked(
            amount,
            description,
            "2024-02-01",
            TransactionType::Expense,
        )
    }

    #[test]
    fn sample_data_has_three_transactions() {
        let store = InMemoryTransactionStore::with_sample_data();

        let transactions = store.list().unwrap();

        let ids: Vec<_> = transactions.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(transactions[0].description, "Grocery shopping");
        assert_eq!(transactions[0].created_at, datetime!(2024-01-15 0:00 UTC));
        assert_eq!(transactions[1].type_, TransactionType::Income);
        assert_eq!(transactions[1].amount, 2500.0);
    }

    #[test]
    fn insert_assigns_next_id_after_sample_data() {
        let mut store = InMemoryTransactionStore::with_sample_data();
        let created_at = datetime!(2024-02-01 12:00 UTC);

        let transaction = store.insert(fields(5.0, "Bus fare"), created_at).unwrap();

        assert_eq!(transaction.id.to_string(), "4");
        assert_eq!(transaction.created_at, created_at);
        assert_eq!(store.len(), Ok(4));
        assert_eq!(store.get(transaction.id), Ok(transaction));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = InMemoryTransactionStore::new();
        assert_eq!(store.is_empty(), Ok(true));
        let created_at = datetime!(2024-02-01 12:00 UTC);
        let first = store.insert(fields(1.0, "first"), created_at).unwrap();
        let second = store.insert(fields(2.0, "second"), created_at).unwrap();

        store.remove(second.id).unwrap();
        assert_eq!(store.is_empty(), Ok(false));
        let third = store.insert(fields(3.0, "third"), created_at).unwrap();

        assert_eq!(first.id.to_string(), "1");
        assert_eq!(second.id.to_string(), "2");
        assert_eq!(third.id.to_string(), "3");
    }

    #[test]
    fn replace_keeps_id_and_creation_time() {
        let mut store = InMemoryTransactionStore::with_sample_data();
        let id = TransactionId::new(2);
        let before = store.get(id).unwrap();

        let updated = store
            .replace(
                id,
                TransactionFields::new_unchecked(
                    3000.0,
                    "Salary and bonus",
                    "2024-01-31",
                    TransactionType::Income,
                ),
            )
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.amount, 3000.0);
        assert_eq!(updated.description, "Salary and bonus");
        assert_eq!(updated.date, "2024-01-31");
        assert_eq!(store.get(id), Ok(updated));
        assert_eq!(store.len(), Ok(3));
    }

    #[test]
    fn replace_missing_transaction_changes_nothing() {
        let mut store = InMemoryTransactionStore::with_sample_data();
        let before = store.list().unwrap();

        let result = store.replace(TransactionId::new(42), fields(1.0, "nope"));

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn remove_twice_fails_the_second_time() {
        let mut store = InMemoryTransactionStore::with_sample_data();
        let id = TransactionId::new(1);

        let removed = store.remove(id).unwrap();

        assert_eq!(removed.description, "Grocery shopping");
        assert_eq!(store.len(), Ok(2));
        assert_eq!(store.remove(id), Err(Error::NotFound));
        assert_eq!(store.get(id), Err(Error::NotFound));
    }
}
