//! Parts tab: catalog list with categories, suppliers, and stock
//! adjustments

use shared::{validate_adjustment, validate_sku, AdjustmentType, Part, PartCategory, Supplier, UnitOfMeasure};

use crate::api::{ApiClient, PartInput, PartsApi, StockAdjustmentInput, SuppliersApi};
use crate::error::{AppError, AppResult};
use crate::state::{ListCore, ModalState};

use super::{opt_id, opt_text, parse_decimal, parse_u32, required_text};

/// Controller for the parts tab
pub struct PartsScreen {
    pub core: ListCore<Part>,
    categories: Vec<PartCategory>,
    suppliers: Vec<Supplier>,
    parts: PartsApi,
    suppliers_api: SuppliersApi,
}

/// Part add/edit form as entered; numeric fields stay strings until
/// submission
#[derive(Debug, Clone)]
pub struct PartForm {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub unit_of_measure: UnitOfMeasure,
    pub unit_cost: String,
    pub current_stock: String,
    pub min_stock_level: String,
    pub max_stock_level: String,
    pub location: String,
}

impl Default for PartForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            description: String::new(),
            category: String::new(),
            supplier: String::new(),
            unit_of_measure: UnitOfMeasure::Piece,
            unit_cost: String::new(),
            current_stock: "0".to_string(),
            min_stock_level: "0".to_string(),
            max_stock_level: "0".to_string(),
            location: String::new(),
        }
    }
}

impl PartForm {
    /// Coerce form strings into the API payload
    pub fn to_input(&self) -> AppResult<PartInput> {
        let name = required_text("name", &self.name)?;
        let sku = required_text("sku", &self.sku)?;
        validate_sku(&sku).map_err(|msg| AppError::validation("sku", msg))?;

        Ok(PartInput {
            name,
            sku,
            description: opt_text(&self.description),
            category: opt_id("category", &self.category)?,
            supplier: opt_id("supplier", &self.supplier)?,
            unit_of_measure: self.unit_of_measure,
            unit_cost: parse_decimal("unit_cost", &self.unit_cost)?,
            current_stock: parse_u32("current_stock", &self.current_stock)?,
            min_stock_level: parse_u32("min_stock_level", &self.min_stock_level)?,
            max_stock_level: parse_u32("max_stock_level", &self.max_stock_level)?,
            location: opt_text(&self.location),
        })
    }
}

/// Stock adjustment form for the adjust modal
#[derive(Debug, Clone)]
pub struct AdjustmentForm {
    pub adjustment_type: AdjustmentType,
    pub quantity: String,
    pub reason: String,
    pub reference_number: String,
}

impl Default for AdjustmentForm {
    fn default() -> Self {
        Self {
            adjustment_type: AdjustmentType::Purchase,
            quantity: String::new(),
            reason: String::new(),
            reference_number: String::new(),
        }
    }
}

impl AdjustmentForm {
    /// Coerce and run the OUT-direction business check against the
    /// part's current stock; rejection happens before any API call
    pub fn to_input(&self, part_id: i64, current_stock: u32) -> AppResult<StockAdjustmentInput> {
        let quantity = parse_u32("quantity", &self.quantity)?;
        validate_adjustment(self.adjustment_type, quantity, current_stock)
            .map_err(|msg| AppError::validation("quantity", msg))?;

        Ok(StockAdjustmentInput {
            part: part_id,
            adjustment_type: self.adjustment_type,
            quantity,
            reason: required_text("reason", &self.reason)?,
            reference_number: opt_text(&self.reference_number),
        })
    }
}

impl PartsScreen {
    pub fn new(client: &ApiClient, page_size: u32) -> Self {
        Self {
            core: ListCore::new(page_size),
            categories: Vec::new(),
            suppliers: Vec::new(),
            parts: PartsApi::new(client.clone()),
            suppliers_api: SuppliersApi::new(client.clone()),
        }
    }

    pub fn categories(&self) -> &[PartCategory] {
        &self.categories
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Fetch the parts page and both reference lists concurrently
    ///
    /// The join is all-or-nothing: if any lookup fails the screen
    /// shows one error with empty lists, never partial data.
    pub async fn load(&mut self) {
        let generation = self.core.begin_load();
        let query = self.core.filters.to_query();

        let result = tokio::try_join!(
            self.parts.list(&query),
            self.parts.categories(),
            self.suppliers_api.list_all(),
        );

        match result {
            Ok((page, categories, suppliers)) => {
                if self.core.finish_load(generation, Ok(page)) {
                    self.categories = categories;
                    self.suppliers = suppliers;
                }
            }
            Err(err) => {
                if self.core.finish_load(generation, Err(err)) {
                    self.categories.clear();
                    self.suppliers.clear();
                }
            }
        }
    }

    /// Manual retry re-invokes the load with the same last-used
    /// filter state
    pub async fn retry(&mut self) {
        self.load().await;
    }

    /// Reload if a mutation signalled stale data or nothing was loaded
    /// yet
    pub async fn sync(&mut self) {
        if self.core.needs_reload() {
            self.load().await;
        }
    }

    pub async fn create(&mut self, form: &PartForm) {
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input() {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.parts.create(&input).await {
            Ok(part) => {
                tracing::info!(sku = %part.sku, "part created");
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    pub async fn update(&mut self, form: &PartForm) {
        let ModalState::Edit(id) = self.core.modal else {
            return;
        };
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input() {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.parts.update(id, &input).await {
            Ok(_) => self.core.mutation_succeeded(),
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    /// Delete only proceeds from the explicit confirmation modal
    pub async fn delete_confirmed(&mut self) {
        let ModalState::ConfirmDelete(id) = self.core.modal else {
            return;
        };
        if !self.core.submit.begin() {
            return;
        }
        match self.parts.delete(id).await {
            Ok(()) => self.core.mutation_succeeded(),
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    /// Record a stock adjustment from the adjust modal
    pub async fn adjust_stock(&mut self, form: &AdjustmentForm) {
        let ModalState::Adjust(part_id) = self.core.modal else {
            return;
        };
        if !self.core.submit.begin() {
            return;
        }
        let current_stock = self
            .core
            .results()
            .iter()
            .find(|p| p.id == part_id)
            .map(|p| p.current_stock);
        let Some(current_stock) = current_stock else {
            return self.core.mutation_failed(&AppError::NotFound("Part".to_string()));
        };

        let input = match form.to_input(part_id, current_stock) {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.parts.create_adjustment(&input).await {
            Ok(adjustment) => {
                tracing::info!(
                    part = part_id,
                    adjustment_type = adjustment.adjustment_type.as_str(),
                    quantity = adjustment.quantity,
                    "stock adjustment recorded"
                );
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }
}
