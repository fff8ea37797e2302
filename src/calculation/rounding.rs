//! Currency rounding policy.
//!
//! Contribution and per-bracket tax amounts are rounded to the nearest whole
//! currency unit, half-up (`MidpointAwayFromZero`). The policy is fixed here so
//! every stage rounds identically.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the nearest whole currency unit, half-up.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("2024.5").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("2025").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
