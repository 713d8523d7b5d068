//! Supplier endpoints

use serde::Serialize;
use validator::Validate;

use shared::{Page, Supplier, SupplierStatus};

use crate::error::AppResult;

use super::ApiClient;

/// Client for supplier records
#[derive(Clone)]
pub struct SuppliersApi {
    client: ApiClient,
}

/// Payload for creating or updating a supplier
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SupplierInput {
    #[validate(length(min = 1))]
    pub name: String,
    pub contact_person: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: SupplierStatus,
    pub payment_terms: Option<String>,
    pub tax_number: Option<String>,
    pub notes: Option<String>,
}

impl SuppliersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &[(String, String)]) -> AppResult<Page<Supplier>> {
        self.client.get_json("suppliers", query).await
    }

    /// Full supplier reference list for facet dropdowns
    pub async fn list_all(&self) -> AppResult<Vec<Supplier>> {
        let page: Page<Supplier> = self
            .client
            .get_json(
                "suppliers",
                &[
                    ("page".to_string(), "1".to_string()),
                    ("page_size".to_string(), "500".to_string()),
                ],
            )
            .await?;
        Ok(page.results)
    }

    pub async fn get(&self, id: i64) -> AppResult<Supplier> {
        self.client.get_json(&format!("suppliers/{}", id), &[]).await
    }

    pub async fn create(&self, input: &SupplierInput) -> AppResult<Supplier> {
        self.client.post_json("suppliers", input).await
    }

    pub async fn update(&self, id: i64, input: &SupplierInput) -> AppResult<Supplier> {
        self.client
            .put_json(&format!("suppliers/{}", id), input)
            .await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("suppliers/{}", id)).await
    }
}
