//! Mandatory social-security contribution functionality.
//!
//! This module computes the employee-side and employer-side contributions as
//! fixed percentages of gross salary.

use rust_decimal::Decimal;

use crate::config::ContributionRates;

use super::rounding::round_currency;

/// The result of the mandatory contribution calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionResult {
    /// Employee-side contribution, deducted from the employee's pay.
    pub employee: Decimal,
    /// Employer-side contribution. Informational for total-cost-of-employment
    /// reporting; never subtracted from the employee's net salary.
    pub employer: Decimal,
}

impl ContributionResult {
    /// A result with both contributions at zero.
    pub const ZERO: ContributionResult = ContributionResult {
        employee: Decimal::ZERO,
        employer: Decimal::ZERO,
    };
}

/// Computes mandatory contributions over a gross salary.
///
/// When the toggle is disabled both sides are zero. When enabled, each side is
/// the gross salary multiplied by its configured rate, rounded to the nearest
/// whole currency unit half-up.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary the contributions are computed over
/// * `apply` - Whether the mandatory contribution is elected
/// * `rates` - The configured employee and employer rates
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_contributions;
/// use payroll_engine::config::ContributionRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = ContributionRates {
///     employee: Decimal::from_str("0.09").unwrap(),
///     employer: Decimal::from_str("0.26").unwrap(),
/// };
///
/// let result = calculate_contributions(Decimal::from_str("22500").unwrap(), true, rates);
/// assert_eq!(result.employee, Decimal::from_str("2025").unwrap());
/// assert_eq!(result.employer, Decimal::from_str("5850").unwrap());
/// ```
pub fn calculate_contributions(
    gross_salary: Decimal,
    apply: bool,
    rates: ContributionRates,
) -> ContributionResult {
    if !apply {
        return ContributionResult::ZERO;
    }

    ContributionResult {
        employee: round_currency(gross_salary * rates.employee),
        employer: round_currency(gross_salary * rates.employer),
    }
}
