//! Common utility functions for income figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole currency unit using half-up rounding.
///
/// Values at exactly .5 round away from zero, matching how displayed
/// currency amounts are rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use hustle_core::calculations::common::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(865.49)), dec!(865));
/// assert_eq!(round_to_whole(dec!(865.50)), dec!(866));
/// assert_eq!(round_to_whole(dec!(-865.50)), dec!(-866)); // Away from zero
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
