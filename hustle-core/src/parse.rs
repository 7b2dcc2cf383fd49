//! Whole-number parsing for numeric form fields.
//!
//! Form edits never fail: text that does not start with a number becomes
//! zero. The rules follow how browsers read an integer out of a number
//! input: leading whitespace is skipped, one optional sign is accepted, the
//! run of ASCII digits that follows is the value, and anything after it
//! (a decimal point, letters, a second number) is ignored. Digit runs too
//! large for a [`Decimal`] saturate at [`Decimal::MAX`] or [`Decimal::MIN`].

use rust_decimal::Decimal;
use tracing::debug;

/// Parses the leading whole number of `s`, or returns `None` when there is
/// none.
fn leading_whole_number(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = rest[..digits_len].trim_start_matches('0');
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    // Only ASCII digits remain, so a failed parse means the value overflowed
    let value = match digits.parse::<Decimal>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => Decimal::MIN,
        Err(_) => Decimal::MAX,
    };
    Some(value)
}

/// Parses numeric form input into a whole number, substituting zero for
/// anything unparseable.
///
/// ```
/// use hustle_core::parse_whole_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_whole_number("25"), Decimal::from(25));
/// assert_eq!(parse_whole_number("12.9"), Decimal::from(12));
/// assert_eq!(parse_whole_number("abc"), Decimal::ZERO);
/// assert_eq!(parse_whole_number(""), Decimal::ZERO);
/// ```
pub fn parse_whole_number(s: &str) -> Decimal {
    match leading_whole_number(s) {
        // Negative zero collapses to plain zero
        Some(value) if value.is_zero() => Decimal::ZERO,
        Some(value) => value,
        None => {
            debug!(input = %s, "not a whole number; using 0");
            Decimal::ZERO
        }
    }
}
