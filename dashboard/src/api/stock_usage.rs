//! Stock usage endpoints

use chrono::NaiveDate;
use serde::Serialize;

use shared::{Page, StockUsage, UsageType};

use crate::error::AppResult;

use super::ApiClient;

/// Client for stock usage records
#[derive(Clone)]
pub struct StockUsageApi {
    client: ApiClient,
}

/// Payload for recording stock usage
#[derive(Debug, Clone, Serialize)]
pub struct StockUsageInput {
    pub part: i64,
    pub usage_type: UsageType,
    pub quantity_used: u32,
    pub used_by: String,
    pub usage_date: NaiveDate,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

impl StockUsageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &[(String, String)]) -> AppResult<Page<StockUsage>> {
        self.client.get_json("stock-usage", query).await
    }

    /// Usage records are append-only: create and list, no edit/delete
    pub async fn create(&self, input: &StockUsageInput) -> AppResult<StockUsage> {
        self.client.post_json("stock-usage", input).await
    }
}
