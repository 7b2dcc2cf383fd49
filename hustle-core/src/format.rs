//! US dollar formatting for displayed figures.

use rust_decimal::Decimal;

use crate::calculations::common::round_to_whole;

/// Inserts a comma between every group of three digits, counting from the
/// right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as whole US dollars, e.g. `$10,392` or `-$456`.
///
/// The value is rounded half away from zero. The sign comes from the
/// unrounded value, so a small negative amount shows as `-$0`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use hustle_core::format_usd;
///
/// assert_eq!(format_usd(dec!(866.00)), "$866");
/// assert_eq!(format_usd(dec!(51960)), "$51,960");
/// assert_eq!(format_usd(dec!(-456.70)), "-$457");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_to_whole(value);
    let digits = rounded.abs().normalize().to_string();
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_usd(dec!(0)), "$0");
        assert_eq!(format_usd(dec!(5)), "$5");
        assert_eq!(format_usd(dec!(999)), "$999");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_usd(dec!(1000)), "$1,000");
        assert_eq!(format_usd(dec!(10392)), "$10,392");
        assert_eq!(format_usd(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn fractions_round_half_away_from_zero() {
        assert_eq!(format_usd(dec!(394.03)), "$394");
        assert_eq!(format_usd(dec!(394.50)), "$395");
        assert_eq!(format_usd(dec!(999.5)), "$1,000");
    }

    #[test]
    fn negatives_put_sign_before_dollar() {
        assert_eq!(format_usd(dec!(-50)), "-$50");
        assert_eq!(format_usd(dec!(-5480.40)), "-$5,480");
    }

    #[test]
    fn negative_amount_rounding_to_zero_keeps_sign() {
        assert_eq!(format_usd(dec!(-0.4)), "-$0");
        assert_eq!(format_usd(dec!(-0.34)), "-$0");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(format_usd(dec!(-0.00)), "$0");
        assert_eq!(format_usd(dec!(0.4)), "$0");
    }

    #[test]
    fn trailing_scale_does_not_leak_into_output() {
        assert_eq!(format_usd(dec!(4330.000)), "$4,330");
    }
}
