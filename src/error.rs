//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount was missing, not a number, or not strictly positive.
    #[error("Amount must be greater than 0")]
    InvalidAmount,

    /// The description was missing, not a string, or only whitespace.
    #[error("Description is required")]
    MissingDescription,

    /// The date was missing or empty.
    ///
    /// The format of the date is not checked, any non-empty string is accepted.
    #[error("Date is required")]
    MissingDate,

    /// The transaction type was something other than "income" or "expense".
    #[error("Type must be either income or expense")]
    InvalidTransactionType,

    /// An update or delete request did not say which transaction to act on.
    #[error("Transaction ID is required")]
    MissingTransactionId,

    /// The request body could not be parsed as a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// No transaction has the requested ID.
    #[error("Transaction not found")]
    NotFound,

    /// The route does not exist.
    #[error("The requested resource could not be found")]
    RouteNotFound,

    /// The route exists but does not accept the request's HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An unexpected error occurred while handling a request.
    ///
    /// The string is the message shown to the client. The underlying cause
    /// should be logged where it happens and not passed on to the client.
    #[error("{0}")]
    Internal(&'static str),
}

impl Error {
    /// The HTTP status code the client should receive for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAmount
            | Error::MissingDescription
            | Error::MissingDate
            | Error::InvalidTransactionType
            | Error::MissingTransactionId
            | Error::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::RouteNotFound => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Responding with internal server error: {self}");
        } else {
            tracing::debug!("Rejected request with {status}: {self}");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
