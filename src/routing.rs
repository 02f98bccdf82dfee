//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState, Error, endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_summary_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint)
                .post(create_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_SUMMARY_API,
            get(get_summary_endpoint),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot").into_response()
}

async fn get_404_not_found() -> Error {
    Error::RouteNotFound
}

async fn get_405_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
