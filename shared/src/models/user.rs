//! User account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LoyaltyTier;

/// A user account on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A client user with loyalty standing attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientUser {
    #[serde(flatten)]
    pub user: User,
    pub loyalty_tier: LoyaltyTier,
    pub loyalty_points: i64,
}

/// Roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Supervisor,
    Agent,
    Staff,
    Client,
    Supplier,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Supervisor => "Supervisor",
            UserRole::Agent => "Agent",
            UserRole::Staff => "Staff",
            UserRole::Client => "Client",
            UserRole::Supplier => "Supplier",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }
}
