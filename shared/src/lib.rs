//! Shared types and models for the Fleet Ops Dashboard
//!
//! This crate contains types shared between the dashboard core, the
//! browser UI (via WASM), and other components of the system.

pub mod format;
pub mod models;
pub mod pagination;
pub mod types;
pub mod validation;

pub use format::*;
pub use models::*;
pub use pagination::*;
pub use types::*;
pub use validation::*;
