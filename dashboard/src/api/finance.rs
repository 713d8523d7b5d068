//! Financial endpoints: payments, expenses, income, and the
//! aggregated summary

use shared::{format_input_date, DateRange, Expense, FinancialSummary, IncomeRecord, Page, Payment};

use crate::error::AppResult;

use super::ApiClient;

/// Client for financial records and summaries
#[derive(Clone)]
pub struct FinanceApi {
    client: ApiClient,
}

impl FinanceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn payments(&self, query: &[(String, String)]) -> AppResult<Page<Payment>> {
        self.client.get_json("payments", query).await
    }

    pub async fn expenses(&self, query: &[(String, String)]) -> AppResult<Page<Expense>> {
        self.client.get_json("expenses", query).await
    }

    pub async fn income(&self, query: &[(String, String)]) -> AppResult<Page<IncomeRecord>> {
        self.client.get_json("income", query).await
    }

    /// Pre-aggregated summary from the backend; preferred over the
    /// client-side fallback computation
    pub async fn summary(&self, range: &DateRange) -> AppResult<FinancialSummary> {
        self.client
            .get_json("finance/summary", &range_query(range))
            .await
    }

    /// Raw payment list for the fallback aggregation path
    pub async fn payments_raw(&self, range: &DateRange) -> AppResult<Vec<Payment>> {
        let mut query = range_query(range);
        query.push(("page_size".to_string(), "1000".to_string()));
        let page: Page<Payment> = self.client.get_json("payments", &query).await?;
        Ok(page.results)
    }

    /// Raw expense list for the fallback aggregation path
    pub async fn expenses_raw(&self, range: &DateRange) -> AppResult<Vec<Expense>> {
        let mut query = range_query(range);
        query.push(("page_size".to_string(), "1000".to_string()));
        let page: Page<Expense> = self.client.get_json("expenses", &query).await?;
        Ok(page.results)
    }
}

fn range_query(range: &DateRange) -> Vec<(String, String)> {
    vec![
        ("start_date".to_string(), format_input_date(range.start)),
        ("end_date".to_string(), format_input_date(range.end)),
    ]
}
