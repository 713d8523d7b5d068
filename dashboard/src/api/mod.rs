//! Typed client layer over the remote REST API
//!
//! All dashboard I/O goes through [`ApiClient`]. List endpoints are
//! offset-paginated and respond with `{results, count}`; mutation
//! endpoints return the created/updated record, or nothing for delete.

mod finance;
mod parts;
mod reports;
mod stock_usage;
mod suppliers;
mod users;
mod vehicles;

pub use finance::FinanceApi;
pub use parts::{PartInput, PartsApi, StockAdjustmentInput};
pub use reports::{ReportFormat, ReportsApi};
pub use stock_usage::{StockUsageApi, StockUsageInput};
pub use suppliers::{SupplierInput, SuppliersApi};
pub use users::{UserInput, UsersApi};
pub use vehicles::{VehicleInput, VehiclesApi};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// HTTP client for the remote API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Client with default settings and no auth token; used by tests
    /// and one-off tools
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check the response status, collapsing any HTTP error into
    /// [`AppError::Api`]; the body is kept only for logging
    async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "API request failed");
        Err(AppError::Api {
            detail: format!("status {}: {}", status.as_u16(), body),
            status: Some(status.as_u16()),
        })
    }

    /// GET a JSON resource with query parameters
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> AppResult<T> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let value = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(value)
    }

    /// POST a JSON body and decode the created record
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let value = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(value)
    }

    /// PUT a JSON body and decode the updated record
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let value = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(value)
    }

    /// DELETE a resource; success responses carry no body
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// GET a binary blob (report exports)
    pub async fn get_bytes(&self, path: &str, query: &[(String, String)]) -> AppResult<Vec<u8>> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
