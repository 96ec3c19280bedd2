//! Currency display helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Glyph placed in front of amounts unless configured otherwise.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "￥";

/// Fraction digits kept when an amount is not a whole number.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats `value` with `,` between every group of three integer digits.
///
/// Whole amounts print without a fraction. Fractions are rounded half away
/// from zero to at most three digits and trailing zeros are dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use baito_core::currency::group_thousands;
///
/// assert_eq!(group_thousands(dec!(180000)), "180,000");
/// assert_eq!(group_thousands(dec!(-3200)), "-3,200");
/// assert_eq!(group_thousands(dec!(1234.5)), "1,234.5");
/// ```
pub fn group_thousands(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Formats `value` as an amount of money, e.g. `￥180,000`.
///
/// The glyph always comes first, so negative amounts read `￥-3,200`.
pub fn format_currency(
    value: Decimal,
    symbol: &str,
) -> String {
    format!("{symbol}{}", group_thousands(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn group_thousands_small_values_have_no_separator() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(7)), "7");
        assert_eq!(group_thousands(dec!(999)), "999");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(dec!(1000)), "1,000");
        assert_eq!(group_thousands(dec!(19200)), "19,200");
        assert_eq!(group_thousands(dec!(180000)), "180,000");
        assert_eq!(group_thousands(dec!(1234567)), "1,234,567");
    }

    #[test]
    fn group_thousands_handles_negative_values() {
        assert_eq!(group_thousands(dec!(-26000)), "-26,000");
        assert_eq!(group_thousands(dec!(-5)), "-5");
    }

    #[test]
    fn group_thousands_drops_trailing_zero_scale() {
        assert_eq!(group_thousands(dec!(14175.00)), "14,175");
    }

    #[test]
    fn group_thousands_rounds_long_fractions() {
        assert_eq!(group_thousands(dec!(1.23456)), "1.235");
        assert_eq!(group_thousands(dec!(-0.0001)), "0");
    }

    #[test]
    fn format_currency_prefixes_symbol() {
        assert_eq!(format_currency(dec!(180000), DEFAULT_CURRENCY_SYMBOL), "￥180,000");
        assert_eq!(format_currency(dec!(3200), "$"), "$3,200");
    }

    #[test]
    fn format_currency_symbol_precedes_sign() {
        assert_eq!(format_currency(dec!(-3200), "￥"), "￥-3,200");
    }
}
