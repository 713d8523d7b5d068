//! Fleet Ops Dashboard - Terminal Preview
//!
//! One-shot preview of the dashboard tabs against the configured API:
//! loads the first page of each list, logs the headline numbers, and
//! exits. The browser UI drives the same controllers through the WASM
//! bindings.

use std::path::Path;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_ops_dashboard::screens::{
    FinanceScreen, PartsScreen, ReportsScreen, SuppliersScreen, UsersScreen, VehiclesScreen,
};
use fleet_ops_dashboard::{ApiClient, Config};

use shared::{format_ksh, stock_status, StockStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleet_dash=info,fleet_ops_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Fleet Ops Dashboard preview");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("API: {}", config.api.base_url);

    let client = ApiClient::new(&config.api)?;
    let page_size = config.ui.page_size;

    // Parts tab with its reference lookups
    let mut parts = PartsScreen::new(&client, page_size);
    parts.load().await;
    if let Some(message) = parts.core.load_state().error() {
        tracing::warn!("parts: {}", message);
    } else {
        let low_stock = parts
            .core
            .results()
            .iter()
            .filter(|p| {
                stock_status(p.current_stock, p.min_stock_level) != StockStatus::InStock
            })
            .count();
        tracing::info!(
            "parts: {} of {} loaded, {} categories, {} suppliers, {} low or out of stock",
            parts.core.results().len(),
            parts.core.load_state().count(),
            parts.categories().len(),
            parts.suppliers().len(),
            low_stock
        );
    }

    // Suppliers tab
    let mut suppliers = SuppliersScreen::new(&client, page_size);
    suppliers.load().await;
    match suppliers.core.load_state().error() {
        Some(message) => tracing::warn!("suppliers: {}", message),
        None => tracing::info!(
            "suppliers: {} of {} loaded",
            suppliers.core.results().len(),
            suppliers.core.load_state().count()
        ),
    }

    // Vehicles tab
    let mut vehicles = VehiclesScreen::new(&client, page_size);
    vehicles.load().await;
    match vehicles.core.load_state().error() {
        Some(message) => tracing::warn!("vehicles: {}", message),
        None => {
            for vehicle in vehicles.core.results() {
                tracing::info!(
                    "vehicle {} {} {}: {}",
                    vehicle.year,
                    vehicle.make,
                    vehicle.model,
                    vehicle.availability()
                );
            }
        }
    }

    // Users tab restores its persisted filters
    let mut users = UsersScreen::new(&client, page_size, Path::new(&config.ui.filter_store_path));
    users.load().await;
    match users.core.load_state().error() {
        Some(message) => tracing::warn!("users: {}", message),
        None => tracing::info!(
            "users: {} of {} loaded",
            users.core.results().len(),
            users.core.load_state().count()
        ),
    }

    // Client directory with loyalty standing
    users.load_clients().await;
    match users.clients.load_state().error() {
        Some(message) => tracing::warn!("clients: {}", message),
        None => {
            for client_user in users.clients.results() {
                tracing::info!(
                    "client {}: {} tier, {} points",
                    client_user.user.name,
                    client_user.loyalty_tier.as_str(),
                    client_user.loyalty_points
                );
            }
        }
    }

    // Finance income and payment sub-tabs
    let mut finance = FinanceScreen::new(&client, page_size);
    finance.load_income().await;
    match finance.income.load_state().error() {
        Some(message) => tracing::warn!("income: {}", message),
        None => tracing::info!(
            "income: {} of {} loaded",
            finance.income.results().len(),
            finance.income.load_state().count()
        ),
    }

    finance.load_payments().await;
    match finance.payments.load_state().error() {
        Some(message) => tracing::warn!("payments: {}", message),
        None => tracing::info!(
            "payments: {} of {} loaded",
            finance.payments.results().len(),
            finance.payments.load_state().count()
        ),
    }

    // Current-month financial summary, falling back to local
    // aggregation when the summary endpoint is down
    let mut reports = ReportsScreen::new(&client, Utc::now().date_naive());
    reports.load_summary().await;
    match reports.summary() {
        Some(summary) => tracing::info!(
            "summary ({:?}): income {}, expenses {}, net {}",
            reports.source(),
            format_ksh(summary.total_income),
            format_ksh(summary.total_expenses),
            format_ksh(summary.net_profit)
        ),
        None => {
            if let Some(message) = reports.error() {
                tracing::warn!("summary: {}", message);
            }
        }
    }

    Ok(())
}
