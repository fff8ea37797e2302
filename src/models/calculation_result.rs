//! Calculation result models for the Payroll Calculation Engine.
//!
//! This module contains the [`PayrollCalculation`] type and its associated
//! structures that capture all outputs from a gross-to-net payroll breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The earnings side of a payroll calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Earnings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let earnings = Earnings {
///     base_salary: Decimal::from_str("20000").unwrap(),
///     bonuses: Decimal::ZERO,
///     transport_allowance: Decimal::from_str("2500").unwrap(),
///     housing_allowance: Decimal::ZERO,
///     total_allowances: Decimal::from_str("2500").unwrap(),
///     gross_salary: Decimal::from_str("22500").unwrap(),
/// };
/// assert_eq!(
///     earnings.gross_salary,
///     earnings.base_salary + earnings.bonuses + earnings.total_allowances
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Monthly base compensation, echoed from the input.
    pub base_salary: Decimal,
    /// Bonuses, echoed from the input.
    pub bonuses: Decimal,
    /// Transport allowance, echoed from the input.
    pub transport_allowance: Decimal,
    /// Housing allowance, echoed from the input.
    pub housing_allowance: Decimal,
    /// Sum of transport and housing allowances.
    pub total_allowances: Decimal,
    /// Base salary plus bonuses plus total allowances, before any deduction.
    pub gross_salary: Decimal,
}

/// The deductions side of a payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Employee-side social-security contribution (zero when disabled).
    pub employee_contribution: Decimal,
    /// Flat retirement fund deduction, echoed from the input.
    pub retirement_fund: Decimal,
    /// Flat professional tax deduction, echoed from the input.
    pub professional_tax: Decimal,
    /// Flat union contribution deduction, echoed from the input.
    pub union_contribution: Decimal,
    /// Sum of all deductions excluded from the income tax base.
    pub total_before_tax: Decimal,
    /// Gross salary minus pre-tax deductions; the income tax base.
    pub taxable_income: Decimal,
    /// Progressive income tax (zero when disabled).
    pub income_tax: Decimal,
    /// Pre-tax deductions plus income tax.
    pub total: Decimal,
}

/// The employer side of a payroll calculation.
///
/// The employer contribution is informational for total-cost-of-employment
/// reporting; it is never subtracted from the employee's net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCost {
    /// Employer-side social-security contribution (zero when disabled).
    pub employer_contribution: Decimal,
    /// Gross salary plus the employer contribution.
    pub total_cost: Decimal,
}

/// The complete, itemized result of one payroll calculation.
///
/// A `PayrollCalculation` is produced fresh on every invocation from a
/// [`PayrollInput`](super::PayrollInput); it has no independent identity or
/// mutation path. Persisting results as payroll-history records is the
/// responsibility of external collaborators, which store each calculation
/// verbatim alongside employee/period identifiers they supply themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The earnings breakdown.
    pub earnings: Earnings,
    /// The deductions breakdown.
    pub deductions: Deductions,
    /// Gross salary minus total deductions. May be negative when flat
    /// deductions exceed gross; the engine returns the value unclamped and
    /// callers decide whether to surface a warning.
    pub net_salary: Decimal,
    /// The employer-side breakdown.
    pub employer: EmployerCost,
}
