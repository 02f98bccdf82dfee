//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use time::OffsetDateTime;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction,
        payload::{TransactionPayload, read_payload},
        state::{TransactionState, internal_error},
    },
};

const CREATE_FAILED: &str = "Failed to create transaction";

/// A route handler for creating a new transaction, responds with the created
/// transaction and the status code 201.
///
/// The body is validated before the store is touched, so a rejected request
/// never changes the store.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let fields = read_payload(body)?.validate_fields()?;

    let mut store = state.lock_store(CREATE_FAILED)?;
    let transaction = store
        .insert(fields, created_at_now())
        .map_err(internal_error(CREATE_FAILED))?;

    tracing::info!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// The current UTC time to millisecond precision, the precision clients
/// expect for creation timestamps.
fn created_at_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    now.replace_millisecond(now.millisecond()).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use time::OffsetDateTime;

    use crate::{
        AppState, build_router, endpoints,
        stores::InMemoryTransactionStore,
        transaction::{Transaction, TransactionType},
    };

    use super::created_at_now;

    fn test_server() -> TestServer {
        let state = AppState::new(InMemoryTransactionStore::with_sample_data());

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    async fn count_transactions(server: &TestServer) -> usize {
        server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>()
            .len()
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let server = test_server();
        let before = OffsetDateTime::now_utc();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": 50,
                "description": "Coffee",
                "date": "2024-01-20",
                "type": "expense",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let transaction = response.json::<Transaction>();
        assert_eq!(transaction.id.to_string(), "4");
        assert_eq!(transaction.amount, 50.0);
        assert_eq!(transaction.description, "Coffee");
        assert_eq!(transaction.date, "2024-01-20");
        assert_eq!(transaction.type_, TransactionType::Expense);
        assert!(transaction.created_at.unix_timestamp() >= before.unix_timestamp());
        assert_eq!(transaction.created_at.nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn creation_time_has_millisecond_precision() {
        let created_at = created_at_now();

        assert_eq!(created_at.nanosecond() % 1_000_000, 0);
        assert!(created_at <= OffsetDateTime::now_utc());
    }

    #[tokio::test]
    async fn created_transaction_is_listed_first() {
        let server = test_server();

        server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": 50,
                "description": "Coffee",
                "date": "2024-01-20",
                "type": "expense",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();

        let ids: Vec<_> = transactions.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, ["4", "1", "3", "2"]);
    }

    #[tokio::test]
    async fn trims_description_and_parses_string_amount() {
        let server = test_server();

        let transaction = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": "2500.50",
                "description": "   Bonus  ",
                "date": "2024-02-01",
                "type": "income",
            }))
            .await
            .json::<Transaction>();

        assert_eq!(transaction.amount, 2500.5);
        assert_eq!(transaction.description, "Bonus");
        assert_eq!(transaction.type_, TransactionType::Income);
    }

    #[tokio::test]
    async fn each_create_gets_a_fresh_id() {
        let server = test_server();
        let mut seen = vec!["1".to_owned(), "2".to_owned(), "3".to_owned()];

        for i in 0..5 {
            let transaction = server
                .post(endpoints::TRANSACTIONS_API)
                .json(&json!({
                    "amount": i + 1,
                    "description": format!("transaction {i}"),
                    "date": "2024-02-01",
                    "type": "expense",
                }))
                .await
                .json::<Transaction>();

            let id = transaction.id.to_string();
            assert!(!seen.contains(&id), "ID {id} was reused");
            seen.push(id);
        }
    }

    #[tokio::test]
    async fn rejects_invalid_fields_without_creating_anything() {
        let server = test_server();
        let cases = [
            (
                json!({ "amount": 0, "description": "x", "date": "2024-01-20", "type": "expense" }),
                "Amount must be greater than 0",
            ),
            (
                json!({ "amount": -5, "description": "x", "date": "2024-01-20", "type": "expense" }),
                "Amount must be greater than 0",
            ),
            (
                json!({ "amount": 5, "description": "   ", "date": "2024-01-20", "type": "expense" }),
                "Description is required",
            ),
            (
                json!({ "amount": 5, "description": "x", "type": "expense" }),
                "Date is required",
            ),
            (
                json!({ "amount": 5, "description": "x", "date": "2024-01-20", "type": "transfer" }),
                "Type must be either income or expense",
            ),
        ];

        for (body, want_error) in cases {
            let response = server.post(endpoints::TRANSACTIONS_API).json(&body).await;

            response.assert_status_bad_request();
            assert_eq!(response.json::<Value>(), json!({ "error": want_error }));
        }

        assert_eq!(count_transactions(&server).await, 3);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let server = test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .text("{ not json")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        let message = body["error"]
            .as_str()
            .expect("error message is not a string");
        assert!(
            message.starts_with("Invalid request body"),
            "unexpected error message {message:?}"
        );
        assert_eq!(count_transactions(&server).await, 3);
    }
}
