//! User management and loyalty endpoints

use serde::Serialize;
use validator::Validate;

use shared::{ClientUser, LoyaltyAccount, LoyaltyTransaction, Page, User, UserRole, UserStatus};

use crate::error::AppResult;

use super::ApiClient;

/// Client for user accounts and client loyalty data
#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

/// Payload for creating or updating a user
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &[(String, String)]) -> AppResult<Page<User>> {
        self.client.get_json("users", query).await
    }

    /// Client users carry loyalty standing in addition to the account
    pub async fn clients(&self, query: &[(String, String)]) -> AppResult<Page<ClientUser>> {
        self.client.get_json("clients", query).await
    }

    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.client.get_json(&format!("users/{}", id), &[]).await
    }

    pub async fn create(&self, input: &UserInput) -> AppResult<User> {
        self.client.post_json("users", input).await
    }

    pub async fn update(&self, id: i64, input: &UserInput) -> AppResult<User> {
        self.client.put_json(&format!("users/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("users/{}", id)).await
    }

    pub async fn loyalty_account(&self, client_id: i64) -> AppResult<LoyaltyAccount> {
        self.client
            .get_json(&format!("clients/{}/loyalty", client_id), &[])
            .await
    }

    /// Earn/redeem history, append-only from the dashboard's side
    pub async fn loyalty_transactions(
        &self,
        client_id: i64,
    ) -> AppResult<Vec<LoyaltyTransaction>> {
        self.client
            .get_json(&format!("clients/{}/loyalty/transactions", client_id), &[])
            .await
    }
}
