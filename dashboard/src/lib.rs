//! Fleet Ops Dashboard core
//!
//! Headless implementation of the admin dashboard for the vehicle
//! rental business: typed API client, the shared
//! list-filter-paginate-mutate state machinery, and one controller per
//! tab. The browser UI binds to this through the `wasm` crate; the
//! `fleet-dash` binary drives the same controllers from the terminal.

pub mod api;
pub mod config;
pub mod error;
pub mod screens;
pub mod state;

pub use api::ApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
