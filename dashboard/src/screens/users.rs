//! Users tab: account management, client loyalty, and persisted
//! filters
//!
//! This is the one tab whose filter state survives restarts: every
//! filter change is written straight to a small JSON file, and the
//! saved state is restored on construction. Persistence failures are
//! logged and otherwise ignored so a read-only disk never blocks the
//! list.

use std::path::{Path, PathBuf};

use validator::Validate;

use shared::{ClientUser, LoyaltyAccount, LoyaltyTransaction, User, UserRole, UserStatus};

use crate::api::{ApiClient, UserInput, UsersApi};
use crate::error::{AppError, AppResult};
use crate::state::{FilterState, ListCore, ModalState};

use super::{opt_text, required_text};

/// Controller for the users tab
///
/// The client directory is a separate list with its own filter and
/// load state; only the account list's filters are persisted.
pub struct UsersScreen {
    pub core: ListCore<User>,
    pub clients: ListCore<ClientUser>,
    loyalty: Option<LoyaltyPanel>,
    api: UsersApi,
    store_path: PathBuf,
}

/// Loyalty standing and history for the client being viewed
#[derive(Debug, Clone)]
pub struct LoyaltyPanel {
    pub account: LoyaltyAccount,
    pub transactions: Vec<LoyaltyTransaction>,
}

/// User add/edit form as entered
#[derive(Debug, Clone)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: UserRole::Staff,
            status: UserStatus::Active,
        }
    }
}

impl UserForm {
    pub fn to_input(&self) -> AppResult<UserInput> {
        let input = UserInput {
            name: required_text("name", &self.name)?,
            email: required_text("email", &self.email)?,
            phone: opt_text(&self.phone),
            role: self.role,
            status: self.status,
        };
        input
            .validate()
            .map_err(|_| AppError::validation("form", "Please check the form fields"))?;
        Ok(input)
    }
}

impl UsersScreen {
    /// Restore the persisted filter slice if one exists
    pub fn new(client: &ApiClient, page_size: u32, store_path: &Path) -> Self {
        let mut core = ListCore::new(page_size);
        if let Some(filters) = load_filters(store_path) {
            core.filters = filters;
        }
        Self {
            core,
            clients: ListCore::new(page_size),
            loyalty: None,
            api: UsersApi::new(client.clone()),
            store_path: store_path.to_path_buf(),
        }
    }

    pub fn loyalty(&self) -> Option<&LoyaltyPanel> {
        self.loyalty.as_ref()
    }

    /// Filter mutators mirror [`FilterState`] but write the new state
    /// to disk before returning
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.core.filters.set_search(text);
        self.persist_filters();
    }

    pub fn set_facet(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.core.filters.set_facet(name, value);
        self.persist_filters();
    }

    pub fn set_page(&mut self, page: u32) {
        self.core.filters.set_page(page);
        self.persist_filters();
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.core.filters.set_page_size(page_size);
        self.persist_filters();
    }

    pub fn reset_filters(&mut self) {
        self.core.filters.reset();
        self.persist_filters();
    }

    fn persist_filters(&self) {
        if let Err(err) = save_filters(&self.store_path, &self.core.filters) {
            tracing::warn!(error = %err, path = %self.store_path.display(), "filter save failed");
        }
    }

    pub async fn load(&mut self) {
        let generation = self.core.begin_load();
        let query = self.core.filters.to_query();
        let result = self.api.list(&query).await;
        self.core.finish_load(generation, result);
    }

    /// Fetch the client directory page with loyalty standing attached
    pub async fn load_clients(&mut self) {
        let generation = self.clients.begin_load();
        let query = self.clients.filters.to_query();
        let result = self.api.clients(&query).await;
        self.clients.finish_load(generation, result);
    }

    pub async fn retry(&mut self) {
        self.load().await;
    }

    pub async fn sync(&mut self) {
        if self.core.needs_reload() {
            self.load().await;
        }
        if self.clients.needs_reload() {
            self.load_clients().await;
        }
    }

    /// Open the view modal for a client and fetch their loyalty
    /// standing and history together, all-or-nothing
    pub async fn view_client(&mut self, client_id: i64) -> AppResult<()> {
        self.core.modal = ModalState::View(client_id);
        self.loyalty = None;

        let result = tokio::try_join!(
            self.api.loyalty_account(client_id),
            self.api.loyalty_transactions(client_id),
        );
        match result {
            Ok((account, transactions)) => {
                self.loyalty = Some(LoyaltyPanel {
                    account,
                    transactions,
                });
                Ok(())
            }
            Err(err) => {
                tracing::error!(client_id, error = %err, "loyalty load failed");
                Err(err)
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.core.modal.close();
        self.loyalty = None;
    }

    pub async fn create(&mut self, form: &UserForm) {
        if !self.core.submit.begin() {
            return;
        }
        let input = match form.to_input() {
            Ok(input) => input,
            Err(err) => return self.core.mutation_failed(&err),
        };
        match self.api.create(&input).await {
            Ok(user) => {
                tracing::info!(email = %user.email, "user created");
                self.core.mutation_succeeded();
            }
            Err(err) => self.core.mutation_failed(&err),
        }
    }

    pub async fn update(&mut self, form: &UserForm) {
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

/// Read the persisted filter slice; a missing or unreadable file is a
/// fresh start, not an error
fn load_filters(path: &Path) -> Option<FilterState> {
    let bytes = std::fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(filters) => Some(filters),
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "filter store unreadable");
            None
        }
    }
}

fn save_filters(path: &Path, filters: &FilterState) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(filters)?;
    std::fs::write(path, json)?;
    Ok(())
}
