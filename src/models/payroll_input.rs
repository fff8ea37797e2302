//! Payroll input model.
//!
//! This module defines the [`PayrollInput`] struct describing one employee's
//! compensation and elected options for a single payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The caller-supplied inputs for one payroll calculation.
///
/// A `PayrollInput` is immutable per calculation: any change in input requires
/// a fresh call to the engine. Callers are responsible for sourcing
/// `base_salary` defaults from their employee directory.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayrollInput {
///     base_salary: Decimal::from_str("45000").unwrap(),
///     work_days: 22,
///     ..PayrollInput::default()
/// };
/// assert!(input.apply_mandatory_contribution);
/// assert!(input.apply_progressive_tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly base compensation.
    pub base_salary: Decimal,
    /// Days worked in the month. Collected and validated (0..=31) but not
    /// multiplied into any amount: the engine does not pro-rate partial
    /// months. Known gap awaiting product clarification.
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    /// Bonuses paid this period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Whether the employee-side social contribution is deducted.
    #[serde(default = "default_true")]
    pub apply_mandatory_contribution: bool,
    /// Whether progressive income tax is applied.
    #[serde(default = "default_true")]
    pub apply_progressive_tax: bool,
    /// Flat retirement fund deduction, supplied by the caller.
    #[serde(default)]
    pub retirement_fund: Decimal,
    /// Flat professional tax deduction, supplied by the caller.
    #[serde(default)]
    pub professional_tax: Decimal,
    /// Flat union contribution deduction, supplied by the caller.
    #[serde(default)]
    pub union_contribution: Decimal,
}

fn default_work_days() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for PayrollInput {
    fn default() -> Self {
        Self {
            base_salary: Decimal::ZERO,
            work_days: default_work_days(),
            bonuses: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            housing_allowance: Decimal::ZERO,
            apply_mandatory_contribution: true,
            apply_progressive_tax: true,
            retirement_fund: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            union_contribution: Decimal::ZERO,
        }
    }
}
