//! Fleet vehicle endpoints

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::{Page, Vehicle, VehicleCondition};

use crate::error::AppResult;

use super::ApiClient;

/// Client for fleet inventory vehicles
#[derive(Clone)]
pub struct VehiclesApi {
    client: ApiClient,
}

/// Payload for creating or updating a vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleInput {
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
}

impl VehiclesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &[(String, String)]) -> AppResult<Page<Vehicle>> {
        self.client.get_json("vehicles", query).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Vehicle> {
        self.client.get_json(&format!("vehicles/{}", id), &[]).await
    }

    pub async fn create(&self, input: &VehicleInput) -> AppResult<Vehicle> {
        self.client.post_json("vehicles", input).await
    }

    pub async fn update(&self, id: i64, input: &VehicleInput) -> AppResult<Vehicle> {
        self.client
            .put_json(&format!("vehicles/{}", id), input)
            .await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("vehicles/{}", id)).await
    }
}
