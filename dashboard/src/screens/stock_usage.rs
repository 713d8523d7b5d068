//! Stock usage tab: append-only record of parts consumed

use shared::{validate_usage_quantity, Part, StockUsage, UsageType};

use crate::api::{ApiClient, PartsApi, StockUsageApi, StockUsageInput};
use crate::error::{AppError, AppResult};
use crate::state::ListCore;

use super::{opt_text, parse_date, parse_u32, required_text};

/// Controller for the stock usage tab
pub struct StockUsageScreen {
    pub core: ListCore<StockUsage>,
    parts: Vec<Part>,
    api: StockUsageApi,
    parts_api: PartsApi,
}

/// Usage entry form as entered
#[derive(Debug, Clone)]
pub struct UsageForm {
    pub part: String,
    pub usage_type: UsageType,
    pub quantity_used: String,
    pub used_by: String,
    pub usage_date: String,
    pub reference_number: String,
    pub notes: String,
}

impl Default for UsageForm {
    fn default() -> Self {
        Self {
            part: String::new(),
            usage_type: UsageType::Maintenance,
            quantity_used: String::new(),
            used_by: String::new(),
            usage_date: String::new(),
            reference_number: String::new(),
            notes: String::new(),
        }
    }
}

impl UsageForm {
    /// Coerce and check the quantity against the part's available
    /// stock before any API call
    pub fn to_input(&self, parts: &[Part]) -> AppResult<StockUsageInput> {
        let part_id: i64 = self
            .part
            .trim()
            .parse()
            .map_err(|_| AppError::validation("part", "A part must be selected"))?;
        let part = parts
            .iter()
            .find(|p| p.id == part_id)
            .ok_or_else(|| AppError::NotFound("Part".to_string()))?;

        let quantity_used = parse_u32("quantity_used", &self.quantity_used)?;
        validate_usage_quantity(quantity_used, part.current_stock)
            .map_err(|msg| AppError::validation("quantity_used", msg))?;

        Ok(StockUsageInput {
            part: part_id,
            usage_type: self.usage_type,
            quantity_used,
            used_by: required_text("used_by", &self.used_by)?,
            usage_date: parse_date("usage_date", &self.usage_date)?,
            reference_number: opt_text(&self.reference_number),
            notes: opt_text(&self.notes),
        })
    }
}

impl StockUsageScreen {
    pub fn new(client: &ApiClient, page_size: u32) -> Self {
        Self {
            core: ListCore::new(page_size),
            parts: Vec::new(),
            api: StockUsageApi::new(client.clone()),
            parts_api: PartsApi::new(client.clone()),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Fetch the usage page and the part reference list concurrently,
    /// all-or-nothing
    pub async fn load(&mut self) {
        let generation = self.core.begin_load();
        let query = self.core.filters.to_query();
        let parts_query = vec![
            ("page".to_string(), "1".to_string()),
            ("page_size".to_string(), "500".to_string()),
        ];

        let result = tokio::try_join!(self.api.list(&query), self.parts_api.list(&parts_query));

        match result {
            Ok((page, parts_page)) => {
                if self.core.finish_load(generation, Ok(page)) {
                    self.parts = parts_page.results;
                }
            }
            Err(err) => {
                if self.core.finish_load(generation, Err(err)) {
                    self.parts.clear();
                }
            }
        }
    }

    pub async fn retry(&mut self) {
        self.load().await;
    }

    pub async fn sync(&mut self) {
        if self.core.needs_reload() {
            self.load().await;
        }
    }

    /// Usage records are created but never edited or deleted here
    pub async fn create(&mut self, form: &UsageForm) {
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input(&self.parts) {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.api.create(&input).await {
            Ok(usage) => {
                tracing::info!(
                    part = usage.part,
                    quantity = usage.quantity_used,
                    "stock usage recorded"
                );
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }
}
