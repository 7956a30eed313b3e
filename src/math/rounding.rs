//! Rounding helpers for integer division.
//!
//! This module provides [`div_round`], a free function that performs exact
//! integer division with an explicit [`Rounding`] direction.  It is the
//! low-level building block used by the range mapper, unit conversion, and
//! exchange rates.
//!
//! # Convention
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Value → percent | [`Rounding::Up`] | Inverse truncation lands back on the value |
//! | Percent → value | [`Rounding::Down`] | Never overshoots the selected position |
//! | Converted payment | caller's choice | Depends on who bears the dust |
//!
//! # Examples
//!
//! ```
//! use hypercert_ratio::domain::{ExactInteger, Rounding};
//! use hypercert_ratio::math::div_round;
//!
//! let ten = ExactInteger::from(10);
//! let three = ExactInteger::from(3);
//! assert_eq!(div_round(&ten, &three, Rounding::Down), Some(ExactInteger::from(3)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up), Some(ExactInteger::from(4)));
//! assert_eq!(div_round(&ten, &ExactInteger::zero(), Rounding::Down), None);
//! ```

use num_integer::Integer;
use num_rational::BigRational;

use crate::domain::{ExactInteger, Rounding};

/// Integer division with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (toward negative infinity).
/// - [`Rounding::Up`]: ceiling division (toward positive infinity).
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(
    numerator: &ExactInteger,
    denominator: &ExactInteger,
    rounding: Rounding,
) -> Option<ExactInteger> {
    if denominator.is_zero() {
        return None;
    }
    Some(div_round_nonzero(numerator, denominator, rounding))
}

/// [`div_round`] for divisors that are non-zero by construction
/// (range widths, powers of ten).
///
/// # Panics
///
/// Panics if `denominator` is zero.
#[must_use]
pub(crate) fn div_round_nonzero(
    numerator: &ExactInteger,
    denominator: &ExactInteger,
    rounding: Rounding,
) -> ExactInteger {
    debug_assert!(!denominator.is_zero(), "divisor must be non-zero");
    let n = numerator.get();
    let d = denominator.get();
    let q = match rounding {
        Rounding::Down => n.div_floor(d),
        // ceil(n / d) == -floor(-n / d)
        Rounding::Up => -((-n).div_floor(d)),
    };
    ExactInteger::new(q)
}

/// Rounds `numerator / denominator` to the integer with the larger
/// magnitude (away from zero).
#[must_use]
pub(crate) fn div_away_from_zero(numerator: &ExactInteger, denominator: &ExactInteger) -> ExactInteger {
    div_round_nonzero(numerator, denominator, magnitude_up(numerator, denominator))
}

/// Rounds `numerator / denominator` toward zero (truncation).
#[must_use]
pub(crate) fn div_truncate(numerator: &ExactInteger, denominator: &ExactInteger) -> ExactInteger {
    div_round_nonzero(
        numerator,
        denominator,
        magnitude_up(numerator, denominator).opposite(),
    )
}

/// Signed-line direction that grows the magnitude of the quotient.
fn magnitude_up(numerator: &ExactInteger, denominator: &ExactInteger) -> Rounding {
    if numerator.is_negative() == denominator.is_negative() {
        Rounding::Up
    } else {
        Rounding::Down
    }
}

/// Rounds a rational to the nearest integer, ties away from zero.
#[must_use]
pub(crate) fn round_half_away(value: &BigRational) -> ExactInteger {
    ExactInteger::new(value.round().to_integer())
}

/// Rounds a rational to an integer in the given direction.
#[must_use]
pub(crate) fn rational_round(value: &BigRational, rounding: Rounding) -> ExactInteger {
    let q = match rounding {
        Rounding::Down => value.floor(),
        Rounding::Up => value.ceil(),
    };
    ExactInteger::new(q.to_integer())
}
