//! Vehicles tab: fleet inventory with derived availability

use shared::{AvailabilityStatus, Vehicle, VehicleCondition};

use crate::api::{ApiClient, VehicleInput, VehiclesApi};
use crate::error::AppResult;
use crate::state::{ListCore, ModalState};

use super::{opt_text, parse_decimal, parse_i32, parse_opt_date, required_text};

/// Controller for the vehicles tab
pub struct VehiclesScreen {
    pub core: ListCore<Vehicle>,
    api: VehiclesApi,
}

/// Vehicle add/edit form as entered
#[derive(Debug, Clone)]
pub struct VehicleForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub registration_number: String,
    pub category: String,
    pub condition: VehicleCondition,
    pub location: String,
    pub purchase_price: String,
    pub current_value: String,
    pub maintenance_cost: String,
    pub last_inspection_date: String,
    pub next_inspection_date: String,
    pub is_available: bool,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: String::new(),
            registration_number: String::new(),
            category: String::new(),
            condition: VehicleCondition::Good,
            location: String::new(),
            purchase_price: String::new(),
            current_value: String::new(),
            maintenance_cost: "0".to_string(),
            last_inspection_date: String::new(),
            next_inspection_date: String::new(),
            is_available: true,
        }
    }
}

impl VehicleForm {
    pub fn to_input(&self) -> AppResult<VehicleInput> {
        Ok(VehicleInput {
            make: required_text("make", &self.make)?,
            model: required_text("model", &self.model)?,
            year: parse_i32("year", &self.year)?,
            registration_number: required_text("registration_number", &self.registration_number)?,
            category: opt_text(&self.category),
            condition: self.condition,
            location: opt_text(&self.location),
            purchase_price: parse_decimal("purchase_price", &self.purchase_price)?,
            current_value: parse_decimal("current_value", &self.current_value)?,
            maintenance_cost: parse_decimal("maintenance_cost", &self.maintenance_cost)?,
            last_inspection_date: parse_opt_date("last_inspection_date", &self.last_inspection_date)?,
            next_inspection_date: parse_opt_date("next_inspection_date", &self.next_inspection_date)?,
            is_available: self.is_available,
        })
    }
}

impl VehiclesScreen {
    pub fn new(client: &ApiClient, page_size: u32) -> Self {
        Self {
            core: ListCore::new(page_size),
            api: VehiclesApi::new(client.clone()),
        }
    }

    /// Status label for a table row; rented vehicles read as Rented
    /// even when flagged available
    pub fn availability_label(vehicle: &Vehicle) -> &'static str {
        vehicle.availability().label()
    }

    /// Rows matching the availability facet after the server-side
    /// filters; the rented flag is derived so this facet filters
    /// locally
    pub fn visible_rows(&self) -> Vec<&Vehicle> {
        let wanted = self.core.filters.facet("availability").and_then(|value| {
            match value {
                "available" => Some(AvailabilityStatus::Available),
                "rented" => Some(AvailabilityStatus::Rented),
                "unavailable" => Some(AvailabilityStatus::Unavailable),
                _ => None,
            }
        });
        self.core
            .results()
            .iter()
            .filter(|v| wanted.map_or(true, |status| v.availability() == status))
            .collect()
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

    pub async fn create(&mut self, form: &VehicleForm) {
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input() {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.api.create(&input).await {
            Ok(vehicle) => {
                tracing::info!(
                    registration = %vehicle.registration_number,
                    "vehicle created"
                );
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    pub async fn update(&mut self, form: &VehicleForm) {
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
