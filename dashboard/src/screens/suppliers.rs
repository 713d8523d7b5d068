//! Suppliers tab: contact management with performance star ratings

use validator::Validate;

use shared::{Supplier, SupplierStatus};

use crate::api::{ApiClient, SupplierInput, SuppliersApi};
use crate::error::{AppError, AppResult};
use crate::state::{ListCore, ModalState};

use super::{opt_text, required_text};

/// Controller for the suppliers tab
pub struct SuppliersScreen {
    pub core: ListCore<Supplier>,
    api: SuppliersApi,
}

/// Supplier add/edit form as entered
#[derive(Debug, Clone)]
pub struct SupplierForm {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub status: SupplierStatus,
    pub payment_terms: String,
    pub tax_number: String,
    pub notes: String,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            status: SupplierStatus::Active,
            payment_terms: String::new(),
            tax_number: String::new(),
            notes: String::new(),
        }
    }
}

impl SupplierForm {
    pub fn to_input(&self) -> AppResult<SupplierInput> {
        let input = SupplierInput {
            name: required_text("name", &self.name)?,
            contact_person: opt_text(&self.contact_person),
            email: opt_text(&self.email),
            phone: opt_text(&self.phone),
            website: opt_text(&self.website),
            address: opt_text(&self.address),
            city: opt_text(&self.city),
            country: opt_text(&self.country),
            status: self.status,
            payment_terms: opt_text(&self.payment_terms),
            tax_number: opt_text(&self.tax_number),
            notes: opt_text(&self.notes),
        };
        input
            .validate()
            .map_err(|_| AppError::validation("form", "Please check the form fields"))?;
        Ok(input)
    }
}

impl SuppliersScreen {
    pub fn new(client: &ApiClient, page_size: u32) -> Self {
        Self {
            core: ListCore::new(page_size),
            api: SuppliersApi::new(client.clone()),
        }
    }

    pub async fn load(&mut self) {
        let generation = self.core.begin_load();
        let query = self.core.filters.to_query();
        let result = self.api.list(&query).await;
        self.core.finish_load(generation, result);
    }

    pub async fn retry(&mut self) {
        self.load().await;
    }

    pub async fn sync(&mut self) {
        if self.core.needs_reload() {
            self.load().await;
        }
    }

    pub async fn create(&mut self, form: &SupplierForm) {
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input() {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.api.create(&input).await {
            Ok(supplier) => {
                tracing::info!(name = %supplier.name, "supplier created");
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    pub async fn update(&mut self, form: &SupplierForm) {
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
        match self.api.update(id, &input).await {
            Ok(_) => self.core.mutation_succeeded(),
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    pub async fn delete_confirmed(&mut self) {
        let ModalState::ConfirmDelete(id) = self.core.modal else {
            return;
        };
        if !self.core.submit.begin() {
            return;
        }
        match self.api.delete(id).await {
            Ok(()) => self.core.mutation_succeeded(),
            Err(err) => self.core.mutation_failed(&err),
        }
    }
}
