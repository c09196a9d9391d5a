//! Currency rendering.
//!
//! The default locale renders Indian rupees: `₹12,34,567.00`. Amounts must be
//! finite; checking that is the caller's job. [`format_currency`] still returns
//! a deterministic string for NaN and infinities, and [`try_format_currency`]
//! rejects them.

use crate::error::FormatError;
use crate::locale::{default_locale, CurrencyFormat, Locale};

/// Formats an amount with the default locale.
///
/// ```rust
/// use portal_fmt::format_currency;
///
/// assert_eq!(format_currency(1234567.0), "₹12,34,567.00");
/// assert_eq!(format_currency(-500.0), "-₹500.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, &default_locale())
}

/// Formats an amount with an explicit locale.
pub fn format_currency_with(amount: f64, locale: &Locale) -> String {
    let format = &locale.currency;
    if amount.is_nan() {
        log::warn!("formatting NaN as currency");
        return format!("{}NaN", format.symbol);
    }
    if amount.is_infinite() {
        log::warn!("formatting infinite amount as currency");
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, format.symbol);
    }
    render_finite(amount, format)
}

/// Formats an amount with the default locale, rejecting non-finite input.
pub fn try_format_currency(amount: f64) -> Result<String, FormatError> {
    try_format_currency_with(amount, &default_locale())
}

/// Formats an amount with an explicit locale, rejecting non-finite input.
pub fn try_format_currency_with(amount: f64, locale: &Locale) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFiniteAmount { amount });
    }
    Ok(render_finite(amount, &locale.currency))
}

fn render_finite(amount: f64, format: &CurrencyFormat) -> String {
    let digits = usize::from(format.fraction_digits);
    let (integer, fraction) = round_half_away(amount.abs(), digits);

    // A value that rounds to zero carries no sign.
    let nonzero = integer.bytes().chain(fraction.bytes()).any(|b| b != b'0');
    let negative = amount < 0.0 && nonzero;

    let mut out = String::with_capacity(integer.len() + digits + format.symbol.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&format.grouping.apply(&integer, format.group_separator));
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

/// Rounds a non-negative finite value to `digits` fraction digits, ties away
/// from zero, returning the integer and fraction digit strings.
///
/// Rounding works on the shortest decimal form of the value, so `1.005`
/// becomes `1.01` even though the nearest double lies just below it.
fn round_half_away(value: f64, digits: usize) -> (String, String) {
    let shortest = value.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let padded = fraction.bytes().chain(std::iter::repeat(b'0')).take(digits);
    let mut kept: Vec<u8> = integer.bytes().chain(padded).map(|b| b - b'0').collect();

    if fraction.as_bytes().get(digits).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let fraction = kept.split_off(kept.len() - digits);
    (digit_text(&kept), digit_text(&fraction))
}

fn digit_text(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Grouping;

    #[test]
    fn test_indian_grouping_with_symbol() {
        assert_eq!(format_currency(1234567.0), "₹12,34,567.00");
        assert_eq!(format_currency(100000.0), "₹1,00,000.00");
        assert_eq!(format_currency(10000000.0), "₹1,00,00,000.00");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(5.0), "₹5.00");
        assert_eq!(format_currency(999.5), "₹999.50");
    }

    #[test]
    fn test_negative_keeps_sign() {
        assert_eq!(format_currency(-500.0), "-₹500.00");
        assert_eq!(format_currency(-1234567.89), "-₹12,34,567.89");
    }

    #[test]
    fn test_rounds_to_fraction_digits() {
        assert_eq!(format_currency(12.345678), "₹12.35");
        assert_eq!(format_currency(99999.999), "₹1,00,000.00");
    }

    #[test]
    fn test_ties_round_half_away_from_zero() {
        assert_eq!(format_currency(0.125), "₹0.13");
        assert_eq!(format_currency(1.005), "₹1.01");
        assert_eq!(format_currency(2.675), "₹2.68");
        assert_eq!(format_currency(1.125), "₹1.13");
        assert_eq!(format_currency(1234567.125), "₹12,34,567.13");
        assert_eq!(format_currency(-0.125), "-₹0.13");
        assert_eq!(format_currency(-0.005), "-₹0.01");
        assert_eq!(format_currency(9.995), "₹10.00");
    }

    #[test]
    fn test_round_half_away_digits() {
        let rounded = |value: f64, digits: usize| {
            let (integer, fraction) = round_half_away(value, digits);
            format!("{}|{}", integer, fraction)
        };
        assert_eq!(rounded(0.0, 2), "0|00");
        assert_eq!(rounded(0.5, 0), "1|");
        assert_eq!(rounded(99.95, 1), "100|0");
        assert_eq!(rounded(7.1, 3), "7|100");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(-0.0), "₹0.00");
        assert_eq!(format_currency(-0.001), "₹0.00");
    }

    #[test]
    fn test_non_finite_lenient() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn test_non_finite_strict() {
        assert!(matches!(
            try_format_currency(f64::INFINITY),
            Err(FormatError::NonFiniteAmount { .. })
        ));
        assert_eq!(try_format_currency(42.0).unwrap(), "₹42.00");
    }

    #[test]
    fn test_custom_format() {
        let mut locale = Locale::default();
        locale.currency = CurrencyFormat {
            symbol: "€".to_string(),
            fraction_digits: 0,
            grouping: Grouping::Western,
            decimal_separator: ',',
            group_separator: '.',
        };
        assert_eq!(format_currency_with(1234567.4, &locale), "€1.234.567");
        assert_eq!(format_currency_with(-0.4, &locale), "€0");
    }

    #[test]
    fn test_custom_separators_with_fraction() {
        let mut locale = Locale::default();
        locale.currency.decimal_separator = ',';
        locale.currency.group_separator = ' ';
        locale.currency.grouping = Grouping::Western;
        assert_eq!(format_currency_with(1234.5, &locale), "₹1 234,50");
    }
}
