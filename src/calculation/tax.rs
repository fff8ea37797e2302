//! Progressive income-tax functionality.
//!
//! This module applies a tiered marginal-rate schedule to post-contribution
//! taxable income, bracket by bracket: each bracket taxes only the portion of
//! income that falls inside its bounds, and each bracket's contribution is
//! rounded independently before the contributions are summed. That rounding
//! order is part of the engine's contract; rounding the total once would yield
//! different results at some incomes.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

use super::rounding::round_currency;

/// Computes progressive income tax over a taxable income.
///
/// For each bracket in ascending order, the taxed portion is
/// `max(0, min(taxable_income, upper) − lower)` (with the final bracket
/// open-ended), taxed at the bracket's marginal rate and rounded to the
/// nearest whole currency unit half-up before summing.
///
/// Negative taxable income (flat deductions exceeding gross) clamps every
/// portion at zero, so the result is never negative.
///
/// # Arguments
///
/// * `taxable_income` - Gross salary minus pre-tax deductions
/// * `apply` - Whether progressive tax is elected; disabled yields zero
/// * `brackets` - The validated, contiguous bracket schedule
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket {
///         lower: Decimal::ZERO,
///         upper: Some(Decimal::from_str("30000").unwrap()),
///         rate: Decimal::ZERO,
///     },
///     TaxBracket {
///         lower: Decimal::from_str("30000").unwrap(),
///         upper: None,
///         rate: Decimal::from_str("0.20").unwrap(),
///     },
/// ];
///
/// let tax = calculate_income_tax(Decimal::from_str("93275").unwrap(), true, &brackets);
/// assert_eq!(tax, Decimal::from_str("12655").unwrap());
/// ```
pub fn calculate_income_tax(
    taxable_income: Decimal,
    apply: bool,
    brackets: &[TaxBracket],
) -> Decimal {
    if !apply {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;
    for bracket in brackets {
        let capped = match bracket.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let portion = (capped - bracket.lower).max(Decimal::ZERO);
        total += round_currency(portion * bracket.rate);
    }

    total
}
