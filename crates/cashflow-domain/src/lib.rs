//! cashflow-domain
//!
//! Pure data model for cash-flow projections (budget configuration, rules, daily snapshots).
//! No I/O, no CLI, no storage. Only data types, calendar helpers and boundary validation.

pub mod budget;
pub mod common;
pub mod rules;
pub mod snapshot;
pub mod validation;

pub use budget::*;
pub use common::*;
pub use rules::*;
pub use snapshot::*;
pub use validation::*;
