//! Loyalty points and transaction models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's loyalty standing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub client_id: i64,
    pub tier: LoyaltyTier,
    pub balance: i64,
    pub lifetime_points: i64,
    pub updated_at: DateTime<Utc>,
}

/// Loyalty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "bronze",
            LoyaltyTier::Silver => "silver",
            LoyaltyTier::Gold => "gold",
            LoyaltyTier::Platinum => "platinum",
        }
    }
}

/// An earn or redeem event; append-only from the dashboard's
/// perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyTransaction {
    pub id: i64,
    pub client_id: i64,
    pub kind: LoyaltyTransactionKind,
    /// Signed point delta: positive for earn, negative for redeem
    pub points: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Kind of loyalty movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTransactionKind {
    Earn,
    Redeem,
}
