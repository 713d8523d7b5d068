//! Domain models for the Fleet Ops Dashboard

mod finance;
mod loyalty;
mod part;
mod stock;
mod supplier;
mod user;
mod vehicle;

pub use finance::*;
pub use loyalty::*;
pub use part::*;
pub use stock::*;
pub use supplier::*;
pub use user::*;
pub use vehicle::*;
