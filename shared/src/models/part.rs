//! Spare part catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spare part in the catalog
///
/// `is_low_stock` and `stock_value` are computed server-side; the
/// dashboard only re-derives them for display consistency checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    /// Unique within the catalog
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub category_name: Option<String>,
    pub supplier: Option<i64>,
    pub supplier_name: Option<String>,
    pub unit_of_measure: UnitOfMeasure,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_cost: Decimal,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub location: Option<String>,
    pub is_low_stock: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub stock_value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Part {
    /// Derived stock classification; zero stock takes precedence over
    /// the low-stock threshold
    pub fn stock_status(&self) -> StockStatus {
        stock_status(self.current_stock, self.min_stock_level)
    }

    /// Re-derive the server's low-stock flag from raw fields
    pub fn computed_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock_level
    }

    /// Re-derive the server's stock value from raw fields
    pub fn computed_stock_value(&self) -> Decimal {
        Decimal::from(self.current_stock) * self.unit_cost
    }
}

/// Classify a stock level against its minimum threshold
pub fn stock_status(current_stock: u32, min_stock_level: u32) -> StockStatus {
    if current_stock == 0 {
        StockStatus::OutOfStock
    } else if current_stock <= min_stock_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Presentational stock classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Units a part can be stocked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    Piece,
    Set,
    Liter,
    Kilogram,
    Meter,
    Pair,
}

impl UnitOfMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Piece => "piece",
            UnitOfMeasure::Set => "set",
            UnitOfMeasure::Liter => "liter",
            UnitOfMeasure::Kilogram => "kilogram",
            UnitOfMeasure::Meter => "meter",
            UnitOfMeasure::Pair => "pair",
        }
    }
}

/// Part category reference record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_precedence() {
        // Zero beats low-stock even when the threshold would match
        assert_eq!(stock_status(0, 10), StockStatus::OutOfStock);
        assert_eq!(stock_status(5, 10), StockStatus::LowStock);
        assert_eq!(stock_status(10, 10), StockStatus::LowStock);
        assert_eq!(stock_status(11, 10), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_labels() {
        assert_eq!(StockStatus::OutOfStock.label(), "Out of Stock");
        assert_eq!(StockStatus::LowStock.label(), "Low Stock");
        assert_eq!(StockStatus::InStock.label(), "In Stock");
    }
}
