//! Screen controllers, one per dashboard tab
//!
//! Each screen composes the LFPM state core with its API service:
//! filter changes trigger a reload, mutations run the submit state
//! machine and bump the refresh signal, and the screen re-fetches on
//! the next sync. Form fields arrive as strings and are coerced to
//! typed payloads at submission time, with blank optional fields
//! becoming `null`.

mod finance;
mod parts;
mod reports;
mod stock_usage;
mod suppliers;
mod users;
mod vehicles;

pub use finance::{FinanceScreen, FinanceTab};
pub use parts::{AdjustmentForm, PartForm, PartsScreen};
pub use reports::{ReportsScreen, SummarySource};
pub use stock_usage::{StockUsageScreen, UsageForm};
pub use suppliers::{SupplierForm, SuppliersScreen};
pub use users::{UserForm, UsersScreen};
pub use vehicles::{VehicleForm, VehiclesScreen};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// Blank optional form fields submit as `None` (serialized `null`)
pub(crate) fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional id-valued select: blank means unset
pub(crate) fn opt_id(field: &'static str, value: &str) -> AppResult<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| AppError::validation(field, format!("{} must be a number", field)))
}

pub(crate) fn parse_decimal(field: &'static str, value: &str) -> AppResult<Decimal> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("{} must be a valid amount", field)))
}

pub(crate) fn parse_u32(field: &'static str, value: &str) -> AppResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("{} must be a non-negative number", field)))
}

pub(crate) fn parse_i32(field: &'static str, value: &str) -> AppResult<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("{} must be a number", field)))
}

/// Date-input fields use ISO `YYYY-MM-DD`
pub(crate) fn parse_date(field: &'static str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(field, format!("{} must be a date (YYYY-MM-DD)", field)))
}

pub(crate) fn parse_opt_date(field: &'static str, value: &str) -> AppResult<Option<NaiveDate>> {
    match opt_text(value) {
        None => Ok(None),
        Some(text) => parse_date(field, &text).map(Some),
    }
}

pub(crate) fn required_text(field: &'static str, value: &str) -> AppResult<String> {
    opt_text(value).ok_or_else(|| AppError::validation(field, format!("{} is required", field)))
}
