//! Rate configuration for the payroll engine.
//!
//! This module provides the immutable [`RateTable`] the engine computes with,
//! the built-in Moroccan ruleset, and loading of alternative tables from YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
//! println!("CIMR rate: {}", loader.rate_table().social.cimr_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ProfessionalExpenseRates, RateTable, SocialRates, TaxBracket, WorkTimeRates,
    MAX_ANNUAL_WORK_DAYS, MAX_MONTHLY_HOURS, MAX_MULTIPLIER, MAX_RATE,
};
