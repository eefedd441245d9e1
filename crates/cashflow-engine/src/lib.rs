//! cashflow-engine
//!
//! Deterministic projection of a budget into daily balance snapshots, plus the
//! analytics computed over them. Depends on cashflow-domain. No I/O, no CLI.

pub mod analytics;
pub mod daily_cost;
pub mod error;
pub mod payday;
pub mod projection_service;
pub mod simulation;
pub mod summary;
pub mod time;

#[cfg(test)]
mod tests;

pub use analytics::*;
pub use daily_cost::*;
pub use error::ProjectionError;
pub use payday::*;
pub use projection_service::*;
pub use simulation::*;
pub use summary::*;
pub use time::*;
