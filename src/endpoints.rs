//! The API endpoints URIs.

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to list, create, update and delete transactions.
///
/// Update and delete take the transaction ID in the JSON body.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the totals of income and expenses.
pub const TRANSACTIONS_SUMMARY_API: &str = "/api/transactions/summary";
