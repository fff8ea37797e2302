//! Settlement composition functionality.
//!
//! This module assembles the outputs of the earlier stages into the final
//! itemized [`PayrollCalculation`]: total deductions, net salary, and total
//! employer cost. It performs no validation; invalid input must have been
//! rejected before reaching here.

use rust_decimal::Decimal;

use crate::models::{Deductions, Earnings, EmployerCost, PayrollCalculation, PayrollInput};

use super::contributions::ContributionResult;
use super::earnings::EarningsResult;

/// The income-tax base derived from gross salary and pre-tax deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBase {
    /// Employee contribution plus all flat deductions.
    pub total_before_tax: Decimal,
    /// Gross salary minus pre-tax deductions. May be negative when flat
    /// deductions exceed gross.
    pub taxable_income: Decimal,
}

/// Derives the income-tax base from the earlier stage outputs.
///
/// # Arguments
///
/// * `input` - The payroll input supplying the flat deductions
/// * `earnings` - The aggregated earnings
/// * `contributions` - The mandatory contribution amounts
pub fn tax_base(
    input: &PayrollInput,
    earnings: &EarningsResult,
    contributions: &ContributionResult,
) -> TaxBase {
    let total_before_tax = contributions.employee
        + input.retirement_fund
        + input.professional_tax
        + input.union_contribution;

    TaxBase {
        total_before_tax,
        taxable_income: earnings.gross_salary - total_before_tax,
    }
}

/// Composes the final itemized payroll calculation.
///
/// A negative net salary (deductions exceeding gross) is returned as-is
/// rather than clamped; callers decide whether to surface it as a warning.
///
/// # Arguments
///
/// * `input` - The payroll input, echoed into the earnings and deductions
/// * `earnings` - The aggregated earnings
/// * `contributions` - The mandatory contribution amounts
/// * `base` - The income-tax base derived by [`tax_base`]
/// * `income_tax` - The progressive income tax over `base.taxable_income`
pub fn compose_settlement(
    input: &PayrollInput,
    earnings: &EarningsResult,
    contributions: &ContributionResult,
    base: &TaxBase,
    income_tax: Decimal,
) -> PayrollCalculation {
    let total_deductions = base.total_before_tax + income_tax;
    let net_salary = earnings.gross_salary - total_deductions;

    PayrollCalculation {
        earnings: Earnings {
            base_salary: input.base_salary,
            bonuses: input.bonuses,
            transport_allowance: input.transport_allowance,
            housing_allowance: input.housing_allowance,
            total_allowances: earnings.total_allowances,
            gross_salary: earnings.gross_salary,
        },
        deductions: Deductions {
            employee_contribution: contributions.employee,
            retirement_fund: input.retirement_fund,
            professional_tax: input.professional_tax,
            union_contribution: input.union_contribution,
            total_before_tax: base.total_before_tax,
            taxable_income: base.taxable_income,
            income_tax,
            total: total_deductions,
        },
        net_salary,
        employer: EmployerCost {
            employer_contribution: contributions.employer,
            total_cost: earnings.gross_salary + contributions.employer,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_input() -> PayrollInput {
        PayrollInput {
            base_salary: dec("100000"),
            transport_allowance: dec("2500"),
            retirement_fund: dec("1000"),
            professional_tax: dec("500"),
            union_contribution: dec("200"),
            ..PayrollInput::default()
        }
    }

    fn sample_earnings() -> EarningsResult {
        EarningsResult {
            total_allowances: dec("2500"),
            gross_salary: dec("102500"),
        }
    }

    fn sample_contributions() -> ContributionResult {
        ContributionResult {
            employee: dec("9225"),
            employer: dec("26650"),
        }
    }

    /// SC-001: tax base sums the employee contribution and flat deductions
    #[test]
    fn test_tax_base_sums_pre_tax_deductions() {
        let base = tax_base(&sample_input(), &sample_earnings(), &sample_contributions());

        assert_eq!(base.total_before_tax, dec("10925"));
        assert_eq!(base.taxable_income, dec("91575"));
    }

    /// SC-002: composition satisfies the conservation identities
    #[test]
    fn test_composition_satisfies_conservation() {
        let input = sample_input();
        let earnings = sample_earnings();
        let contributions = sample_contributions();
        let base = tax_base(&input, &earnings, &contributions);
        let income_tax = dec("12315");

        let calculation = compose_settlement(&input, &earnings, &contributions, &base, income_tax);

        assert_eq!(
            calculation.deductions.total,
            base.total_before_tax + income_tax
        );
        assert_eq!(
            calculation.net_salary,
            earnings.gross_salary - calculation.deductions.total
        );
        assert_eq!(
            calculation.employer.total_cost,
            earnings.gross_salary + contributions.employer
        );
    }

    /// SC-003: input amounts are echoed into the breakdown
    #[test]
    fn test_input_amounts_echoed() {
        let input = sample_input();
        let earnings = sample_earnings();
        let contributions = sample_contributions();
        let base = tax_base(&input, &earnings, &contributions);

        let calculation =
            compose_settlement(&input, &earnings, &contributions, &base, Decimal::ZERO);

        assert_eq!(calculation.earnings.base_salary, dec("100000"));
        assert_eq!(calculation.earnings.transport_allowance, dec("2500"));
        assert_eq!(calculation.deductions.retirement_fund, dec("1000"));
        assert_eq!(calculation.deductions.professional_tax, dec("500"));
        assert_eq!(calculation.deductions.union_contribution, dec("200"));
    }

    /// SC-004: negative net salary is returned unclamped
    #[test]
    fn test_negative_net_salary_unclamped() {
        let input = PayrollInput {
            base_salary: dec("20000"),
            retirement_fund: dec("25000"),
            ..PayrollInput::default()
        };
        let earnings = EarningsResult {
            total_allowances: Decimal::ZERO,
            gross_salary: dec("20000"),
        };
        let contributions = ContributionResult::ZERO;
        let base = tax_base(&input, &earnings, &contributions);

        let calculation =
            compose_settlement(&input, &earnings, &contributions, &base, Decimal::ZERO);

        assert_eq!(base.taxable_income, dec("-5000"));
        assert_eq!(calculation.net_salary, dec("-5000"));
    }
}
