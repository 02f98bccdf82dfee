//! Parses and validates the JSON bodies sent to the transaction endpoints.
//!
//! Fields are read as raw JSON values so that a wrongly typed field is
//! reported as a validation error for that field instead of a generic
//! deserialization failure.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    Error,
    transaction::{TransactionFields, TransactionId, TransactionType},
};

/// The JSON body accepted by the create, update and delete endpoints.
///
/// Which fields are required depends on the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionPayload {
    /// The ID of the transaction to update or delete.
    pub id: Option<Value>,
    /// The ID under the key used by older clients. `id` wins when both are sent.
    #[serde(rename = "_id")]
    pub legacy_id: Option<Value>,
    /// The amount of money, either a JSON number or a numeric string.
    pub amount: Option<Value>,
    /// Text detailing the transaction.
    pub description: Option<Value>,
    /// The date the transaction happened.
    pub date: Option<Value>,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub type_: Option<Value>,
}

impl TransactionPayload {
    /// Validate the editable fields in the order amount, description, date, type.
    ///
    /// The first invalid field decides the error.
    pub fn validate_fields(&self) -> Result<TransactionFields, Error> {
        let amount = parse_amount(self.amount.as_ref())?;
        let description = parse_description(self.description.as_ref())?;
        let date = parse_date(self.date.as_ref())?;
        let type_ = parse_type(self.type_.as_ref())?;

        Ok(TransactionFields {
            amount,
            description,
            date,
            type_,
        })
    }

    /// The ID as sent by the client.
    ///
    /// # Errors
    /// Returns [Error::MissingTransactionId] if the ID is absent, empty or
    /// neither a string nor a number.
    pub fn require_id(&self) -> Result<String, Error> {
        match self.id.as_ref().or(self.legacy_id.as_ref()) {
            Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            Some(Value::Number(id)) => Ok(id.to_string()),
            _ => Err(Error::MissingTransactionId),
        }
    }
}

/// Unwrap the JSON body, turning a rejection into an [Error::InvalidRequestBody].
pub fn read_payload(
    body: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<TransactionPayload, Error> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(Error::InvalidRequestBody(rejection.body_text())),
    }
}

/// Resolve a client supplied ID.
///
/// Strings that the store could never have issued cannot name a transaction,
/// so they are reported as [Error::NotFound].
pub fn lookup_id(id: &str) -> Result<TransactionId, Error> {
    id.parse().map_err(|_| Error::NotFound)
}

fn parse_amount(value: Option<&Value>) -> Result<f64, Error> {
    let amount = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount),
    }
}

fn parse_description(value: Option<&Value>) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
        _ => Err(Error::MissingDescription),
    }
}

fn parse_date(value: Option<&Value>) -> Result<String, Error> {
    match value {
        Some(Value::String(date)) if !date.is_empty() => Ok(date.clone()),
        _ => Err(Error::MissingDate),
    }
}

fn parse_type(value: Option<&Value>) -> Result<TransactionType, Error> {
    match value {
        Some(Value::String(text)) => text.parse().map_err(|_| Error::InvalidTransactionType),
        _ => Err(Error::InvalidTransactionType),
    }
}
