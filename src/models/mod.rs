//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod payroll_input;

pub use calculation_result::{Deductions, Earnings, EmployerCost, PayrollCalculation};
pub use payroll_input::PayrollInput;
