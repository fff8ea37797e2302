//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configurations from YAML
//! files, including jurisdiction metadata, the minimum-wage floor, contribution
//! rates, and the progressive tax bracket schedule.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dz").unwrap();
//! println!("Loaded rules: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BracketsConfig, ContributionRates, JurisdictionMetadata, PayrollConfig, RatesConfig, TaxBracket,
};
