//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its ID and type
//! - Parsing and validation of request bodies
//! - Route handlers for listing, creating, updating and deleting transactions
//! - The summary of income and expenses

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod models;
mod payload;
mod state;
mod summary;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::{DELETED_MESSAGE, DeletedTransaction, delete_transaction_endpoint};
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use models::{
    ParseTransactionIdError, ParseTransactionTypeError, Transaction, TransactionFields,
    TransactionId, TransactionType, newest_first, parse_calendar_date,
};
pub use payload::TransactionPayload;
pub use state::TransactionState;
pub use summary::{MonthlyTotals, Summary, get_summary_endpoint, summarise};
