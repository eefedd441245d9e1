#![doc(test(attr(deny(warnings))))]

//! Cashflow Core projects a cash balance day by day from recurring and
//! one-time budget rules, and exposes the analytics and command-line front end
//! built on that projection.

pub mod cli;
pub mod errors;
pub mod utils;

pub use cashflow_config as config;
pub use cashflow_domain as domain;
pub use cashflow_engine as engine;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}
