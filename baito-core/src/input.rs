//! Coercion of raw numeric input text.
//!
//! Numeric fields never reject input. Text is read as an integer prefix:
//! after optional whitespace and sign, the leading run of ASCII digits wins
//! and anything unparseable becomes 0. A `0x` prefix reads hexadecimal.

use rust_decimal::Decimal;
use tracing::debug;

/// Parses `s` as an integer, defaulting to 0.
///
/// Surrounding whitespace is ignored. An optional sign is followed by the
/// longest run of leading digits, so `"12.7"`, `"12abc"` and `"1,500"` give
/// 12, 12 and 1. Text with no leading ASCII digits (including full-width
/// digits) gives 0. Digit runs beyond the range of `i64` saturate.
pub fn coerce_int(s: &str) -> i64 {
    let trimmed = s.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut saw_digit = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        saw_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !saw_digit {
        if !trimmed.is_empty() {
            debug!(input = %s, "non-numeric input coerced to 0");
        }
        return 0;
    }

    if negative { -value } else { value }
}

/// [`coerce_int`] widened to a [`Decimal`] for storage.
pub fn coerce_decimal(s: &str) -> Decimal {
    Decimal::from(coerce_int(s))
}
