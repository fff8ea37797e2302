//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the calculation stages for converting a payroll input
//! into an itemized gross-to-net breakdown: input validation, earnings
//! aggregation, mandatory contribution calculation, progressive income tax,
//! and settlement composition. The stages run strictly in that order with no
//! branching back and no shared state.

mod contributions;
mod earnings;
mod rounding;
mod settlement;
mod tax;
mod validation;

pub use contributions::{ContributionResult, calculate_contributions};
pub use earnings::{EarningsResult, aggregate_earnings};
pub use rounding::round_currency;
pub use settlement::{TaxBase, compose_settlement, tax_base};
pub use tax::calculate_income_tax;
pub use validation::{MAX_WORK_DAYS, validate, validate_for_record};

use crate::config::PayrollConfig;
use crate::error::Violation;
use crate::models::{PayrollCalculation, PayrollInput};

/// Converts a payroll input into an itemized gross-to-net breakdown.
///
/// This is the engine's single logical operation. It is pure and
/// deterministic: the same input and configuration always produce an
/// identical result, and concurrent invocations cannot observe one another.
///
/// # Arguments
///
/// * `input` - The compensation and elected options for one employee
/// * `config` - The validated rates, brackets, and minimum-wage floor
///
/// # Returns
///
/// Returns the itemized [`PayrollCalculation`], or every input violation found
/// when validation fails. The engine never partially computes: a failing input
/// yields no result at all.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/dz").unwrap();
/// let input = PayrollInput {
///     base_salary: Decimal::from_str("45000").unwrap(),
///     ..PayrollInput::default()
/// };
///
/// let calculation = calculate(&input, loader.config()).unwrap();
/// assert_eq!(calculation.earnings.gross_salary, Decimal::from_str("45000").unwrap());
/// ```
pub fn calculate(
    input: &PayrollInput,
    config: &PayrollConfig,
) -> Result<PayrollCalculation, Vec<Violation>> {
    validate(input, config)?;

    let earnings = aggregate_earnings(input);
    let contributions = calculate_contributions(
        earnings.gross_salary,
        input.apply_mandatory_contribution,
        config.contributions(),
    );
    let base = tax_base(input, &earnings, &contributions);
    let income_tax =
        calculate_income_tax(base.taxable_income, input.apply_progressive_tax, config.brackets());

    Ok(compose_settlement(
        input,
        &earnings,
        &contributions,
        &base,
        income_tax,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContributionRates, JurisdictionMetadata, TaxBracket};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_config() -> PayrollConfig {
        PayrollConfig::new(
            JurisdictionMetadata {
                code: "DZ".to_string(),
                name: "Algerian payroll rules".to_string(),
                version: "2025-01-01".to_string(),
                source_url: "https://example.com".to_string(),
            },
            dec("20000"),
            ContributionRates {
                employee: dec("0.09"),
                employer: dec("0.26"),
            },
            vec![
                TaxBracket {
                    lower: dec("0"),
                    upper: Some(dec("30000")),
                    rate: dec("0"),
                },
                TaxBracket {
                    lower: dec("30000"),
                    upper: Some(dec("120000")),
                    rate: dec("0.20"),
                },
                TaxBracket {
                    lower: dec("120000"),
                    upper: None,
                    rate: dec("0.30"),
                },
            ],
        )
        .unwrap()
    }

    /// CA-001: minimum-wage earner with transport allowance
    #[test]
    fn test_minimum_wage_earner_with_transport_allowance() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("20000"),
            transport_allowance: dec("2500"),
            ..PayrollInput::default()
        };

        let calculation = calculate(&input, &config).unwrap();

        assert_eq!(calculation.earnings.gross_salary, dec("22500"));
        assert_eq!(calculation.deductions.employee_contribution, dec("2025"));
        assert_eq!(calculation.deductions.taxable_income, dec("20475"));
        assert_eq!(calculation.deductions.income_tax, dec("0"));
        assert_eq!(calculation.net_salary, dec("20475"));
        assert_eq!(calculation.employer.employer_contribution, dec("5850"));
        assert_eq!(calculation.employer.total_cost, dec("28350"));
    }

    /// CA-002: high earner crosses into the second bracket
    #[test]
    fn test_high_earner_crosses_second_bracket() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("100000"),
            transport_allowance: dec("2500"),
            ..PayrollInput::default()
        };

        let calculation = calculate(&input, &config).unwrap();

        assert_eq!(calculation.earnings.gross_salary, dec("102500"));
        assert_eq!(calculation.deductions.employee_contribution, dec("9225"));
        assert_eq!(calculation.deductions.taxable_income, dec("93275"));
        assert_eq!(calculation.deductions.income_tax, dec("12655"));
        assert_eq!(calculation.net_salary, dec("80620"));
    }

    /// CA-003: below-minimum salary never reaches the calculation stages
    #[test]
    fn test_below_minimum_salary_rejected() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("19999"),
            ..PayrollInput::default()
        };

        let violations = calculate(&input, &config).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::BelowMinimumWage { .. }));
    }

    /// CA-004: out-of-range work days rejected
    #[test]
    fn test_out_of_range_work_days_rejected() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("45000"),
            work_days: 32,
            ..PayrollInput::default()
        };

        let violations = calculate(&input, &config).unwrap_err();
        assert_eq!(violations, vec![Violation::InvalidWorkDays { work_days: 32 }]);
    }

    /// CA-005: with both toggles off, net equals gross
    #[test]
    fn test_both_toggles_off_net_equals_gross() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("150000"),
            bonuses: dec("10000"),
            apply_mandatory_contribution: false,
            apply_progressive_tax: false,
            ..PayrollInput::default()
        };

        let calculation = calculate(&input, &config).unwrap();

        assert_eq!(calculation.earnings.gross_salary, dec("160000"));
        assert_eq!(calculation.net_salary, calculation.earnings.gross_salary);
        assert_eq!(calculation.deductions.total, dec("0"));
        assert_eq!(calculation.employer.total_cost, dec("160000"));
    }

    /// CA-006: disabling the contribution leaves the rest structurally intact
    #[test]
    fn test_contribution_toggle_independence() {
        let config = reference_config();
        let with = PayrollInput {
            base_salary: dec("100000"),
            ..PayrollInput::default()
        };
        let without = PayrollInput {
            apply_mandatory_contribution: false,
            ..with.clone()
        };

        let with = calculate(&with, &config).unwrap();
        let without = calculate(&without, &config).unwrap();

        assert_eq!(without.deductions.employee_contribution, dec("0"));
        assert_eq!(without.employer.employer_contribution, dec("0"));
        assert_eq!(with.earnings, without.earnings);
        // Taxable income differs by exactly the removed contribution.
        assert_eq!(
            without.deductions.taxable_income - with.deductions.taxable_income,
            with.deductions.employee_contribution
        );
    }

    /// CA-007: calculation is idempotent
    #[test]
    fn test_calculation_is_idempotent() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("87654.32"),
            bonuses: dec("1234.56"),
            housing_allowance: dec("5000"),
            retirement_fund: dec("750"),
            ..PayrollInput::default()
        };

        let first = calculate(&input, &config).unwrap();
        let second = calculate(&input, &config).unwrap();
        assert_eq!(first, second);
    }

    /// CA-008: conservation holds with fractional inputs
    #[test]
    fn test_conservation_with_fractional_inputs() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("64321.77"),
            bonuses: dec("321.33"),
            transport_allowance: dec("1250.25"),
            professional_tax: dec("99.99"),
            ..PayrollInput::default()
        };

        let c = calculate(&input, &config).unwrap();

        assert_eq!(
            c.earnings.gross_salary - c.deductions.total,
            c.net_salary
        );
        assert_eq!(
            c.deductions.total,
            c.deductions.total_before_tax + c.deductions.income_tax
        );
    }

    /// CA-009: flat deductions exceeding gross yield a negative net
    #[test]
    fn test_flat_deductions_exceeding_gross_yield_negative_net() {
        let config = reference_config();
        let input = PayrollInput {
            base_salary: dec("20000"),
            retirement_fund: dec("30000"),
            apply_mandatory_contribution: false,
            ..PayrollInput::default()
        };

        let calculation = calculate(&input, &config).unwrap();

        assert_eq!(calculation.deductions.taxable_income, dec("-10000"));
        assert_eq!(calculation.deductions.income_tax, dec("0"));
        assert_eq!(calculation.net_salary, dec("-10000"));
    }
}
