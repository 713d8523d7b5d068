//! Supplier models and performance rating

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A parts supplier
///
/// The performance counters are maintained server-side; only the star
/// rating is derived client-side for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: SupplierStatus,
    pub payment_terms: Option<String>,
    pub tax_number: Option<String>,
    pub notes: Option<String>,
    pub total_orders: u32,
    pub on_time_deliveries: u32,
    pub quality_issues: u32,
    pub parts_supplied: u32,
    pub average_lead_time_days: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    /// Star rating in [0, 5] derived from delivery performance
    pub fn star_rating(&self) -> u8 {
        star_rating(self.total_orders, self.on_time_deliveries, self.quality_issues)
    }
}

/// Compute the 0-5 star rating from performance counters
///
/// `round((on_time_rate * 0.6 + quality_rate * 0.4) * 5)` with
/// half-away-from-zero rounding, so a score of 4.5 rates as 5 stars.
/// Suppliers with no orders yet rate 0.
pub fn star_rating(total_orders: u32, on_time_deliveries: u32, quality_issues: u32) -> u8 {
    if total_orders == 0 {
        return 0;
    }

    let total = Decimal::from(total_orders);
    let on_time_rate = Decimal::from(on_time_deliveries) / total;
    let quality_rate = (Decimal::ONE - Decimal::from(quality_issues) / total).max(Decimal::ZERO);

    // 0.6 / 0.4 weighting of delivery punctuality vs quality
    let weight_on_time = Decimal::new(6, 1);
    let weight_quality = Decimal::new(4, 1);
    let score = (on_time_rate * weight_on_time + quality_rate * weight_quality) * Decimal::from(5);

    let rounded = score
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::from(5));

    rounded.to_u8().unwrap_or(0)
}

/// Supplier account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    Active,
    Inactive,
    Pending,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "active",
            SupplierStatus::Inactive => "inactive",
            SupplierStatus::Pending => "pending",
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rating always lands in [0, 5] regardless of counter values
        #[test]
        fn prop_rating_bounded(
            total in 0u32..=1000,
            on_time in 0u32..=1000,
            issues in 0u32..=1000,
        ) {
            let rating = star_rating(total, on_time.min(total), issues);
            prop_assert!(rating <= 5);
        }

        /// A supplier with all deliveries on time and no issues always
        /// rates 5 once it has any orders
        #[test]
        fn prop_perfect_supplier_rates_five(total in 1u32..=1000) {
            prop_assert_eq!(star_rating(total, total, 0), 5);
        }
    }
}
