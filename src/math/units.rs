//! Decimal text ⇄ minor-unit conversion.
//!
//! Amounts entered by users or returned by price APIs are decimal strings
//! (`"12.5"`); the arithmetic core works in minor units (`12500000` for a
//! 6-decimal token).  The accepted grammar is deliberately strict:
//!
//! ```text
//! [+-]? DIGIT+ ( "." DIGIT+ )?
//! ```
//!
//! Surrounding ASCII whitespace is ignored.  Exponents, separators and
//! bare dots are rejected.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::domain::{Decimals, ExactInteger};
use crate::error::{RatioError, Result};

/// A decimal literal split into its parts.
struct DecimalParts<'a> {
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
}

fn split_decimal(text: &str) -> Option<DecimalParts<'_>> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((w, f)) if !f.is_empty() => (w, f),
        Some(_) => return None,
        None => (unsigned, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    Some(DecimalParts {
        negative,
        whole,
        fraction,
    })
}

fn digits_to_int(digits: &str, text: &str) -> Result<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::default());
    }
    BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| RatioError::InvalidAmount(text.to_string()))
}

/// Parses decimal text into minor units of a token with `decimals` places.
///
/// # Errors
///
/// Returns [`RatioError::InvalidAmount`] if the text is malformed or has
/// more fractional digits than `decimals`.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::Decimals;
/// use hypercert_ratio::math::parse_units;
///
/// let wei = parse_units("1.5", Decimals::MAX).expect("valid");
/// assert_eq!(wei.to_string(), "1500000000000000000");
/// ```
pub fn parse_units(text: &str, decimals: Decimals) -> Result<ExactInteger> {
    let parts = split_decimal(text).ok_or_else(|| RatioError::InvalidAmount(text.to_string()))?;
    let places = usize::from(decimals.get());
    if parts.fraction.len() > places {
        return Err(RatioError::InvalidAmount(text.to_string()));
    }
    let padding = u32::try_from(places - parts.fraction.len())
        .map_err(|_| RatioError::InvalidAmount(text.to_string()))?;
    let whole = ExactInteger::new(digits_to_int(parts.whole, text)?);
    let fraction = ExactInteger::new(digits_to_int(parts.fraction, text)?);
    let magnitude = &decimals.scale_up(&whole) + &(&fraction * &ExactInteger::pow10(padding));
    Ok(if parts.negative { -magnitude } else { magnitude })
}

/// Renders minor units as decimal text with trailing fractional zeros
/// trimmed.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{Decimals, ExactInteger};
/// use hypercert_ratio::math::format_units;
///
/// let d6 = Decimals::new(6).expect("valid");
/// assert_eq!(format_units(&ExactInteger::from(12_500_000), d6), "12.5");
/// assert_eq!(format_units(&ExactInteger::from(-1), d6), "-0.000001");
/// ```
#[must_use]
pub fn format_units(value: &ExactInteger, decimals: Decimals) -> String {
    let places = usize::from(decimals.get());
    let sign = if value.is_negative() { "-" } else { "" };
    let digits = value.abs().to_string();
    if places == 0 {
        return format!("{sign}{digits}");
    }
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (whole, fraction) = padded.split_at(padded.len() - places);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

/// Parses decimal text of any precision into an exact rational.
pub(crate) fn parse_decimal(text: &str) -> Result<BigRational> {
    let parts = split_decimal(text).ok_or_else(|| RatioError::InvalidAmount(text.to_string()))?;
    let scale = u32::try_from(parts.fraction.len())
        .map_err(|_| RatioError::InvalidAmount(text.to_string()))?;
    let digits = format!("{}{}", parts.whole, parts.fraction);
    let numerator = digits_to_int(&digits, text)?;
    let numerator = if parts.negative { -numerator } else { numerator };
    Ok(BigRational::new(
        numerator,
        ExactInteger::pow10(scale).into_inner(),
    ))
}
