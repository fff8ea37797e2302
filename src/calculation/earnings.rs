//! Earnings aggregation functionality.
//!
//! This module sums base salary, bonuses, and allowances into the gross
//! figure the rest of the pipeline works from.

use rust_decimal::Decimal;

use crate::models::PayrollInput;

/// The result of aggregating earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsResult {
    /// Sum of transport and housing allowances.
    pub total_allowances: Decimal,
    /// Base salary plus bonuses plus total allowances.
    pub gross_salary: Decimal,
}

/// Aggregates an input's earnings into allowance and gross totals.
///
/// No rounding happens at this stage; inputs are assumed to already be in
/// decimal currency form.
///
/// # Arguments
///
/// * `input` - The payroll input to aggregate
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_earnings;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayrollInput {
///     base_salary: Decimal::from_str("20000").unwrap(),
///     transport_allowance: Decimal::from_str("2500").unwrap(),
///     ..PayrollInput::default()
/// };
///
/// let earnings = aggregate_earnings(&input);
/// assert_eq!(earnings.total_allowances, Decimal::from_str("2500").unwrap());
/// assert_eq!(earnings.gross_salary, Decimal::from_str("22500").unwrap());
/// ```
pub fn aggregate_earnings(input: &PayrollInput) -> EarningsResult {
    let total_allowances = input.transport_allowance + input.housing_allowance;
    let gross_salary = input.base_salary + input.bonuses + total_allowances;

    EarningsResult {
        total_allowances,
        gross_salary,
    }
}
