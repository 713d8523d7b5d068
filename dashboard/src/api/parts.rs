//! Parts catalog endpoints

use rust_decimal::Decimal;
use serde::Serialize;

use shared::{Page, Part, PartCategory, StockAdjustment, AdjustmentType, UnitOfMeasure};

use crate::error::AppResult;

use super::ApiClient;

/// Client for the parts catalog, categories, and stock adjustments
#[derive(Clone)]
pub struct PartsApi {
    client: ApiClient,
}

/// Payload for creating or updating a part
///
/// Blank optional form fields are submitted as `null` rather than
/// omitted, so optional fields stay plain `Option`s here.
#[derive(Debug, Clone, Serialize)]
pub struct PartInput {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub supplier: Option<i64>,
    pub unit_of_measure: UnitOfMeasure,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_cost: Decimal,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub location: Option<String>,
}

/// Payload for recording a stock adjustment
#[derive(Debug, Clone, Serialize)]
pub struct StockAdjustmentInput {
    pub part: i64,
    pub adjustment_type: AdjustmentType,
    pub quantity: u32,
    pub reason: String,
    pub reference_number: Option<String>,
}

impl PartsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List parts matching the current filters, one page at a time
    pub async fn list(&self, query: &[(String, String)]) -> AppResult<Page<Part>> {
        self.client.get_json("parts", query).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Part> {
        self.client.get_json(&format!("parts/{}", id), &[]).await
    }

    pub async fn create(&self, input: &PartInput) -> AppResult<Part> {
        self.client.post_json("parts", input).await
    }

    pub async fn update(&self, id: i64, input: &PartInput) -> AppResult<Part> {
        self.client.put_json(&format!("parts/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("parts/{}", id)).await
    }

    /// Reference list of part categories for the category facet
    pub async fn categories(&self) -> AppResult<Vec<PartCategory>> {
        self.client.get_json("part-categories", &[]).await
    }

    /// Record a stock adjustment; adjustments are append-only
    pub async fn create_adjustment(
        &self,
        input: &StockAdjustmentInput,
    ) -> AppResult<StockAdjustment> {
        self.client.post_json("stock-adjustments", input).await
    }

    /// Adjustment history for one part
    pub async fn adjustments(&self, part_id: i64) -> AppResult<Vec<StockAdjustment>> {
        self.client
            .get_json(
                "stock-adjustments",
                &[("part".to_string(), part_id.to_string())],
            )
            .await
    }
}
