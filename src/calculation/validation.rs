//! Input validation functionality.
//!
//! This module rejects impossible payroll configurations before any
//! computation happens: base salaries under the minimum-wage floor, work day
//! counts outside the calendar range, and negative monetary amounts. Every
//! violation is collected in a single pass so a caller can highlight all
//! invalid fields at once.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::Violation;
use crate::models::PayrollInput;

/// The highest admissible work day count in one month.
pub const MAX_WORK_DAYS: u32 = 31;

/// Validates a payroll input against the configured rules.
///
/// Checks, in field order:
/// 1. `base_salary` is at least the configured minimum-wage floor
/// 2. `work_days` does not exceed [`MAX_WORK_DAYS`]
/// 3. every optional monetary amount is non-negative
///
/// # Arguments
///
/// * `input` - The payroll input to validate
/// * `config` - The payroll configuration supplying the minimum-wage floor
///
/// # Returns
///
/// Returns `Ok(())` when the input is valid, or `Err` with every violation
/// found (never an empty list). This function never panics for well-typed
/// input and performs no computation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate;
/// use payroll_engine::models::PayrollInput;
/// ```
pub fn validate(input: &PayrollInput, config: &PayrollConfig) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if input.base_salary < config.smig() {
        violations.push(Violation::BelowMinimumWage {
            base_salary: input.base_salary,
            smig: config.smig(),
        });
    }

    if input.work_days > MAX_WORK_DAYS {
        violations.push(Violation::InvalidWorkDays {
            work_days: input.work_days,
        });
    }

    let amounts: [(&'static str, Decimal); 6] = [
        ("bonuses", input.bonuses),
        ("transport_allowance", input.transport_allowance),
        ("housing_allowance", input.housing_allowance),
        ("retirement_fund", input.retirement_fund),
        ("professional_tax", input.professional_tax),
        ("union_contribution", input.union_contribution),
    ];
    for (field, amount) in amounts {
        if amount < Decimal::ZERO {
            violations.push(Violation::NegativeAmount { field });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validates a payroll input for a caller that intends to persist the result.
///
/// Runs [`validate`] and additionally requires a non-blank employee
/// identifier, since payroll-history records are stored against one. The
/// engine itself never needs the identifier to compute.
///
/// # Arguments
///
/// * `input` - The payroll input to validate
/// * `employee_id` - The identifier the result will be recorded under
/// * `config` - The payroll configuration supplying the minimum-wage floor
pub fn validate_for_record(
    input: &PayrollInput,
    employee_id: Option<&str>,
    config: &PayrollConfig,
) -> Result<(), Vec<Violation>> {
    let mut violations = match validate(input, config) {
        Ok(()) => Vec::new(),
        Err(violations) => violations,
    };

    if employee_id.is_none_or(|id| id.trim().is_empty()) {
        violations.push(Violation::MissingContext);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
