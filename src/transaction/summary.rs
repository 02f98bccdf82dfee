//! Totals and a month by month breakdown of income and expenses.
//!
//! Clients may compute the same numbers from the transaction list, this
//! endpoint saves them the work.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{
        Transaction, TransactionType,
        state::{TransactionState, internal_error},
    },
};

const SUMMARY_FAILED: &str = "Failed to summarise transactions";

/// Income and expenses for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// The month formatted as "YYYY-MM".
    pub month: String,
    /// The sum of income in the month.
    pub income: f64,
    /// The sum of expenses in the month.
    pub expenses: f64,
}

/// Aggregates over a list of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The number of transactions.
    pub count: usize,
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
    /// Totals per month in chronological order.
    ///
    /// Transactions whose date is not an ISO calendar date are left out.
    pub monthly: Vec<MonthlyTotals>,
}

/// Sum income and expenses overall and per month.
pub fn summarise(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    // Keyed by (year, month) so iteration is chronological.
    let mut months: BTreeMap<(i32, u8), (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let month = transaction
            .calendar_date()
            .map(|date| months.entry(month_key(date)).or_insert((0.0, 0.0)));

        match transaction.type_ {
            TransactionType::Income => {
                total_income += transaction.amount;
                if let Some((income, _)) = month {
                    *income += transaction.amount;
                }
            }
            TransactionType::Expense => {
                total_expenses += transaction.amount;
                if let Some((_, expenses)) = month {
                    *expenses += transaction.amount;
                }
            }
        }
    }

    let monthly = months
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthlyTotals {
            month: format!("{year:04}-{month:02}"),
            income,
            expenses,
        })
        .collect();

    Summary {
        count: transactions.len(),
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        monthly,
    }
}

fn month_key(date: Date) -> (i32, u8) {
    (date.year(), u8::from(date.month()))
}

/// A route handler that responds with the [Summary] of every transaction.
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Summary>, Error> {
    let store = state.lock_store(SUMMARY_FAILED)?;
    let transactions = store.list().map_err(internal_error(SUMMARY_FAILED))?;

    Ok(Json(summarise(&transactions)))
}
