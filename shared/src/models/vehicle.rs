//! Fleet vehicle inventory models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle held as a fleet inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub registration_number: String,
    pub category: Option<String>,
    pub condition: VehicleCondition,
    pub location: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub purchase_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub current_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub maintenance_cost: Decimal,
    pub last_inspection_date: Option<NaiveDate>,
    pub next_inspection_date: Option<NaiveDate>,
    pub is_available: bool,
    pub is_rented: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Derived status label; an active rental takes precedence over
    /// the availability flag
    pub fn availability(&self) -> AvailabilityStatus {
        availability_status(self.is_available, self.is_rented)
    }
}

/// Classify availability from the raw flags
pub fn availability_status(is_available: bool, is_rented: bool) -> AvailabilityStatus {
    if is_rented {
        AvailabilityStatus::Rented
    } else if is_available {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::Unavailable
    }
}

/// Derived vehicle availability label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Rented,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::Rented => "Rented",
            AvailabilityStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle condition grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl VehicleCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCondition::Excellent => "excellent",
            VehicleCondition::Good => "good",
            VehicleCondition::Fair => "fair",
            VehicleCondition::Poor => "poor",
        }
    }
}
