//! WebAssembly bindings for the Fleet Ops Dashboard
//!
//! Exposes the shared display derivations to the browser UI:
//! - Stock status and vehicle availability labels
//! - Supplier star ratings
//! - Usage type badges
//! - Pagination windowing
//! - Currency, date, and export filename formatting
//! - Pre-submission stock validation
//!
//! Fallible paths are plain `Result<_, String>` helpers; the exported
//! wrappers convert to `JsValue` at the boundary only, so the logic
//! stays testable on native targets.

use std::str::FromStr;

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use shared::{
    availability_status, export_filename, format_display_date, format_ksh, page_window,
    star_rating, stock_status, validate_adjustment, validate_usage_quantity, AdjustmentType,
    DateRange, UsageType,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Stock classification label for a part row
#[wasm_bindgen]
pub fn stock_status_label(current_stock: u32, min_stock_level: u32) -> String {
    stock_status(current_stock, min_stock_level).label().to_string()
}

/// Availability label for a vehicle row; an active rental wins over
/// the availability flag
#[wasm_bindgen]
pub fn vehicle_availability_label(is_available: bool, is_rented: bool) -> String {
    availability_status(is_available, is_rented).label().to_string()
}

/// Supplier star rating in [0, 5] from the performance counters
#[wasm_bindgen]
pub fn supplier_star_rating(total_orders: u32, on_time_deliveries: u32, quality_issues: u32) -> u8 {
    star_rating(total_orders, on_time_deliveries, quality_issues)
}

/// Badge for a usage type as `{"icon": ..., "color": ...}` JSON
///
/// Unrecognized usage types get the default badge instead of an error.
#[wasm_bindgen]
pub fn usage_type_badge(usage_type: &str) -> String {
    badge_json(usage_type)
}

/// Page-number window of at most 5 buttons
#[wasm_bindgen]
pub fn pagination_window(total_pages: u32, current_page: u32) -> Vec<u32> {
    page_window(total_pages, current_page)
}

/// Format a decimal amount string in Kenyan Shillings
#[wasm_bindgen]
pub fn format_currency(amount: &str) -> Result<String, JsValue> {
    try_format_currency(amount).map_err(|e| JsValue::from_str(&e))
}

/// Reformat an ISO date for display: `2026-08-04` -> `August 4, 2026`
#[wasm_bindgen]
pub fn display_date(iso_date: &str) -> Result<String, JsValue> {
    try_display_date(iso_date).map_err(|e| JsValue::from_str(&e))
}

/// Filename for an exported report blob
#[wasm_bindgen]
pub fn report_filename(
    report_type: &str,
    start_date: &str,
    end_date: &str,
    extension: &str,
) -> Result<String, JsValue> {
    try_report_filename(report_type, start_date, end_date, extension)
        .map_err(|e| JsValue::from_str(&e))
}

/// Check a stock adjustment before submission; returns the rejection
/// message, or nothing when the adjustment is valid
#[wasm_bindgen]
pub fn adjustment_error(
    adjustment_type: &str,
    quantity: u32,
    current_stock: u32,
) -> Option<String> {
    let parsed: AdjustmentType =
        match serde_json::from_value(serde_json::Value::String(adjustment_type.to_string())) {
            Ok(parsed) => parsed,
            Err(_) => return Some(format!("Unknown adjustment type: {}", adjustment_type)),
        };
    validate_adjustment(parsed, quantity, current_stock)
        .err()
        .map(str::to_string)
}

/// Check a usage quantity against available stock; returns the
/// rejection message, or nothing when valid
#[wasm_bindgen]
pub fn usage_quantity_error(quantity_used: u32, current_stock: u32) -> Option<String> {
    validate_usage_quantity(quantity_used, current_stock)
        .err()
        .map(str::to_string)
}

fn badge_json(usage_type: &str) -> String {
    let parsed: UsageType =
        serde_json::from_value(serde_json::Value::String(usage_type.to_string()))
            .unwrap_or(UsageType::Unknown);
    let badge = parsed.badge();
    format!(r#"{{"icon":"{}","color":"{}"}}"#, badge.icon, badge.color)
}

fn try_format_currency(amount: &str) -> Result<String, String> {
    let value = Decimal::from_str(amount).map_err(|e| format!("Invalid amount: {}", e))?;
    Ok(format_ksh(value))
}

fn try_display_date(iso_date: &str) -> Result<String, String> {
    Ok(format_display_date(parse_iso(iso_date)?))
}

fn try_report_filename(
    report_type: &str,
    start_date: &str,
    end_date: &str,
    extension: &str,
) -> Result<String, String> {
    let range = DateRange {
        start: parse_iso(start_date)?,
        end: parse_iso(end_date)?,
    };
    Ok(export_filename(report_type, &range, extension))
}

fn parse_iso(value: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date {:?}: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_label() {
        assert_eq!(stock_status_label(0, 10), "Out of Stock");
        assert_eq!(stock_status_label(5, 10), "Low Stock");
        assert_eq!(stock_status_label(50, 10), "In Stock");
    }

    #[test]
    fn test_vehicle_availability_label() {
        assert_eq!(vehicle_availability_label(true, true), "Rented");
        assert_eq!(vehicle_availability_label(true, false), "Available");
        assert_eq!(vehicle_availability_label(false, false), "Unavailable");
    }

    #[test]
    fn test_supplier_star_rating() {
        assert_eq!(supplier_star_rating(10, 9, 1), 5);
        assert_eq!(supplier_star_rating(0, 0, 0), 0);
    }

    #[test]
    fn test_usage_type_badge_json() {
        assert_eq!(badge_json("maintenance"), r#"{"icon":"wrench","color":"blue"}"#);

        // Unknown types fall back to the default badge
        assert_eq!(badge_json("refurbishment"), r#"{"icon":"box","color":"gray"}"#);
    }

    #[test]
    fn test_pagination_window() {
        assert_eq!(pagination_window(12, 6), vec![4, 5, 6, 7, 8]);
        assert_eq!(pagination_window(3, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(try_format_currency("1234567").unwrap(), "KSh 1,234,567");
        assert_eq!(try_format_currency("0").unwrap(), "KSh 0");
        assert!(try_format_currency("not-a-number").is_err());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(try_display_date("2026-08-04").unwrap(), "August 4, 2026");
        assert!(try_display_date("04/08/2026").is_err());
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(
            try_report_filename("revenue", "2026-01-01", "2026-01-31", "pdf").unwrap(),
            "revenue-report-2026-01-01-to-2026-01-31.pdf"
        );
        assert!(try_report_filename("revenue", "January 1", "2026-01-31", "pdf").is_err());
    }

    #[test]
    fn test_adjustment_error_messages() {
        assert_eq!(adjustment_error("purchase", 10, 0), None);
        assert!(adjustment_error("damage", 5, 3).is_some());
        assert_eq!(adjustment_error("correction", 50, 3), None);
        assert!(adjustment_error("refund", 1, 1).is_some());
    }

    #[test]
    fn test_usage_quantity_error() {
        assert_eq!(usage_quantity_error(3, 3), None);
        assert!(usage_quantity_error(4, 3).is_some());
        assert!(usage_quantity_error(0, 3).is_some());
    }
}
