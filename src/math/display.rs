//! Human-oriented rendering of large quantities.

use num_bigint::BigInt;
use num_integer::Integer;

use crate::domain::ExactInteger;

/// Magnitudes at or above `10^19` switch to exponent notation.
pub const EXPONENT_THRESHOLD: u32 = 19;

/// Mantissa digits kept after the decimal point.
const MANTISSA_DECIMALS: usize = 2;

/// Renders a value for display.
///
/// Values with `|value| >= 10^19` are shown as `d.dde+N` with the mantissa
/// rounded half-up to two decimals; smaller values are shown in full.
/// Display only: nothing here feeds back into arithmetic.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::ExactInteger;
/// use hypercert_ratio::math::format_magnitude;
///
/// assert_eq!(format_magnitude(&ExactInteger::from(12_345u32)), "12345");
/// assert_eq!(format_magnitude(&ExactInteger::pow10(19)), "1.00e+19");
/// assert_eq!(format_magnitude(&"123456789012345678901".parse().expect("valid")), "1.23e+20");
/// ```
#[must_use]
pub fn format_magnitude(value: &ExactInteger) -> String {
    let magnitude = value.abs();
    if magnitude < ExactInteger::pow10(EXPONENT_THRESHOLD) {
        return value.to_string();
    }
    let sign = if value.is_negative() { "-" } else { "" };
    let digits = magnitude.to_string();
    let mut exponent = digits.len() - 1;

    // keep 1 + MANTISSA_DECIMALS significant digits, half-up on the next
    let dropped = u32::try_from(exponent - MANTISSA_DECIMALS).unwrap_or(u32::MAX);
    let divisor = BigInt::from(10u8).pow(dropped);
    let (mut kept, remainder) = magnitude.get().div_rem(&divisor);
    if remainder * 2u8 >= divisor {
        kept += 1u8;
    }
    let mut mantissa = kept.to_string();
    if mantissa.len() > MANTISSA_DECIMALS + 1 {
        // 9.995e+N rounded up to 10.00e+N
        mantissa.truncate(MANTISSA_DECIMALS + 1);
        exponent += 1;
    }
    let (lead, tail) = mantissa.split_at(1);
    format!("{sign}{lead}.{tail}e+{exponent}")
}
