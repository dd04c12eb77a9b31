//! Common helpers for money and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use setup_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(66.665)), dec!(66.67));
/// assert_eq!(round_half_up(dec!(33.333)), dec!(33.33));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount in UAE dirhams with thousands separators, dropping
/// fils when the amount is whole.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use setup_core::calculations::common::format_aed;
///
/// assert_eq!(format_aed(dec!(14000)), "AED 14,000");
/// assert_eq!(format_aed(dec!(1250.5)), "AED 1,250.50");
/// ```
pub fn format_aed(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let whole = abs.trunc();
    let fraction = abs - whole;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction.is_zero() {
        format!("AED {sign}{grouped}")
    } else {
        let fils = (fraction * Decimal::ONE_HUNDRED).trunc().to_string();
        format!("AED {sign}{grouped}.{fils:0>2}")
    }
}
