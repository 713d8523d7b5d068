//! Stock adjustment and stock usage models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A manual stock adjustment against a part
///
/// Created once and never mutated or deleted through the dashboard;
/// the effect on the part's current stock is applied server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub id: i64,
    pub part: i64,
    pub part_name: Option<String>,
    pub adjustment_type: AdjustmentType,
    pub quantity: u32,
    pub reason: String,
    pub reference_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Kinds of stock adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Purchase,
    Return,
    Correction,
    Damage,
    Loss,
}

impl AdjustmentType {
    /// Direction the adjustment moves stock in; corrections can move
    /// either way and are therefore not capped by current stock
    pub fn direction(&self) -> AdjustmentDirection {
        match self {
            AdjustmentType::Purchase | AdjustmentType::Return => AdjustmentDirection::In,
            AdjustmentType::Damage | AdjustmentType::Loss => AdjustmentDirection::Out,
            AdjustmentType::Correction => AdjustmentDirection::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentType::Purchase => "purchase",
            AdjustmentType::Return => "return",
            AdjustmentType::Correction => "correction",
            AdjustmentType::Damage => "damage",
            AdjustmentType::Loss => "loss",
        }
    }
}

/// Which way an adjustment moves stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentDirection {
    In,
    Out,
    Both,
}

/// A stock usage record: parts consumed by maintenance, sales, etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUsage {
    pub id: i64,
    pub part: i64,
    pub part_name: Option<String>,
    pub usage_type: UsageType,
    pub quantity_used: u32,
    pub used_by: String,
    pub usage_date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
    /// quantity_used x part unit cost, computed server-side
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
}

/// What a stock usage was for
///
/// Unknown values from the API deserialize to `Unknown` and render
/// with the default badge rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageType {
    Maintenance,
    Sale,
    Internal,
    Damage,
    #[serde(other)]
    Unknown,
}

impl UsageType {
    pub fn badge(&self) -> UsageBadge {
        match self {
            UsageType::Maintenance => UsageBadge {
                icon: "wrench",
                color: "blue",
            },
            UsageType::Sale => UsageBadge {
                icon: "cart",
                color: "green",
            },
            UsageType::Internal => UsageBadge {
                icon: "building",
                color: "purple",
            },
            UsageType::Damage => UsageBadge {
                icon: "alert-triangle",
                color: "red",
            },
            UsageType::Unknown => UsageBadge::default(),
        }
    }
}

/// Icon and color pair for rendering a usage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBadge {
    pub icon: &'static str,
    pub color: &'static str,
}

impl Default for UsageBadge {
    fn default() -> Self {
        Self {
            icon: "box",
            color: "gray",
        }
    }
}
