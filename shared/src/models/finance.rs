//! Financial transaction models and the aggregation contract
//!
//! `summarize` is the single implementation of the financial summary
//! shape. The backend computes the same aggregates; the dashboard only
//! runs this locally when the aggregated endpoint is unavailable, so
//! both paths produce an identical `FinancialSummary`.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rental payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub method: Option<String>,
    pub category: Option<String>,
    pub paid_at: DateTime<Utc>,
}

/// Payment processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
}

/// A business expense
///
/// Read-mostly: edit and delete are not yet implemented in the
/// dashboard and are surfaced as such.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
}

/// A unified income row as shown on the income tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: i64,
    pub source: String,
    pub category: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub date: NaiveDate,
}

/// Aggregated financial overview
///
/// The shape returned by the backend's summary endpoint and produced
/// by the client-side fallback; the two are never mixed for a single
/// summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub successful_payments: u32,
    pub pending_payments: u32,
    pub income_by_category: BTreeMap<String, Decimal>,
    pub expenses_by_category: BTreeMap<String, Decimal>,
    /// Keyed by `YYYY-MM`
    pub monthly_income: BTreeMap<String, Decimal>,
}

/// Compute the financial summary from raw payment and expense lists
///
/// Only successful payments count as income; pending and failed
/// payments contribute to counters but not totals.
pub fn summarize(payments: &[Payment], expenses: &[Expense]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for payment in payments {
        match payment.status {
            PaymentStatus::Success => {
                summary.successful_payments += 1;
                summary.total_income += payment.amount;

                let category = payment
                    .category
                    .clone()
                    .unwrap_or_else(|| "uncategorized".to_string());
                *summary.income_by_category.entry(category).or_default() += payment.amount;

                let month = format!(
                    "{:04}-{:02}",
                    payment.paid_at.year(),
                    payment.paid_at.month()
                );
                *summary.monthly_income.entry(month).or_default() += payment.amount;
            }
            PaymentStatus::Pending => summary.pending_payments += 1,
            PaymentStatus::Failed => {}
        }
    }

    for expense in expenses {
        summary.total_expenses += expense.amount;
        *summary
            .expenses_by_category
            .entry(expense.category.clone())
            .or_default() += expense.amount;
    }

    summary.net_profit = summary.total_income - summary.total_expenses;
    summary
}
