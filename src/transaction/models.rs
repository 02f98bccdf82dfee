//! Defines the core data models for transactions.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

// ============================================================================
// MODELS
// ============================================================================

/// The identifier the store assigns to a transaction.
///
/// IDs are sent over the wire as decimal strings, e.g. `"4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Wrap a raw ID. Only the store should mint new IDs.
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// The ID that follows this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The error returned when a string is not an ID the store could have issued.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseTransactionIdError;

impl FromStr for TransactionId {
    type Err = ParseTransactionIdError;

    /// Parse an ID in its canonical form.
    ///
    /// IDs are compared as strings by clients, so "04" or "+4" do not name
    /// the transaction "4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<u64>().map_err(|_| ParseTransactionIdError)?;

        if id.to_string() == s {
            Ok(Self(id))
        } else {
            Err(ParseTransactionIdError)
        }
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid transaction ID \"{text}\"")))
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

/// The error returned when a string is neither "income" nor "expense".
#[derive(Debug, PartialEq, Eq)]
pub struct ParseTransactionTypeError;

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ParseTransactionTypeError),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned, always greater than zero.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened, as given by the client.
    pub date: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// The transaction date as a calendar date, if it is in ISO format.
    pub fn calendar_date(&self) -> Option<Date> {
        parse_calendar_date(&self.date)
    }
}

/// The user editable fields of a transaction after validation.
///
/// Holding a `TransactionFields` means the amount is positive, the
/// description is trimmed and non-empty and the date is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub(crate) amount: f64,
    pub(crate) description: String,
    pub(crate) date: String,
    pub(crate) type_: TransactionType,
}

impl TransactionFields {
    /// Create fields without checking them.
    ///
    /// Callers must uphold the invariants listed on [TransactionFields].
    pub(crate) fn new_unchecked(
        amount: f64,
        description: &str,
        date: &str,
        type_: TransactionType,
    ) -> Self {
        Self {
            amount,
            description: description.to_owned(),
            date: date.to_owned(),
            type_,
        }
    }
}

// ============================================================================
// ORDERING
// ============================================================================

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse an ISO 8601 calendar date such as "2024-01-15".
pub fn parse_calendar_date(text: &str) -> Option<Date> {
    Date::parse(text, ISO_DATE).ok()
}

/// Compare two transactions so that the newest date comes first.
///
/// Dates that cannot be parsed sort after all valid dates and compare equal
/// to each other, so a stable sort keeps them in their original order.
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    match (a.calendar_date(), b.calendar_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// TESTS
// ============================================================================
