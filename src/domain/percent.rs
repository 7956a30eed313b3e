//! Exact percentage positions.

use core::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::{ExactInteger, Rounding};
use crate::error::{RatioError, Result};

/// A percentage held as an exact rational number.
///
/// `Percent` is what [`RangeMapper`](crate::math::RangeMapper) produces and
/// consumes.  Keeping the value exact (instead of an `f64`) is what lets a
/// value survive a trip through percentage space unchanged; `as_f64` is the
/// narrowing step for display.
///
/// Values are never clamped implicitly.  A percentage of `-3` or `250` is
/// legal and simply means the source value was outside its range; callers
/// that want `[0, 100]` use [`clamped`](Self::clamped).
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::Percent;
///
/// let p = Percent::from_f64(12.5).expect("finite");
/// assert_eq!(p.as_f64(), 12.5);
/// assert!(p.is_within_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(BigRational);

impl Percent {
    /// Wraps an exact rational percentage.
    #[must_use]
    pub const fn new(value: BigRational) -> Self {
        Self(value)
    }

    /// `0%`.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// `100%`.
    #[must_use]
    pub fn hundred() -> Self {
        Self(BigRational::from_integer(BigInt::from(100u8)))
    }

    /// Builds `numerator / denominator` percent.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::DivisionByZero`] if `denominator` is zero.
    pub fn from_ratio(numerator: &ExactInteger, denominator: &ExactInteger) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self(BigRational::new(
            numerator.get().clone(),
            denominator.get().clone(),
        )))
    }

    /// Converts an `f64` percentage exactly (every finite `f64` is a
    /// dyadic rational).
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::NonFinite`] for `NaN` or infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        BigRational::from_float(value)
            .map(Self)
            .ok_or(RatioError::NonFinite)
    }

    /// Returns the exact rational value.
    #[must_use]
    pub const fn get(&self) -> &BigRational {
        &self.0
    }

    /// Narrows to the nearest `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.0.to_f64() {
            Some(v) => v,
            None if self.0.is_negative() => f64::NEG_INFINITY,
            None => f64::INFINITY,
        }
    }

    /// Narrows to an `f64` on a chosen side of the exact value.
    ///
    /// With [`Rounding::Up`] the result is never below the exact
    /// percentage, with [`Rounding::Down`] never above it.  Feeding the
    /// result back through [`from_f64`](Self::from_f64) therefore keeps the
    /// rounding direction of whatever produced this percentage.
    #[must_use]
    pub fn as_f64_directed(&self, rounding: Rounding) -> f64 {
        let mut approx = self.as_f64();
        if approx.is_infinite() && (approx > 0.0) != rounding.is_up() {
            return if approx > 0.0 { f64::MAX } else { f64::MIN };
        }
        while let Some(exact) = BigRational::from_float(approx) {
            let on_side = match rounding {
                Rounding::Up => exact >= self.0,
                Rounding::Down => exact <= self.0,
            };
            if on_side {
                break;
            }
            approx = next_f64(approx, rounding);
        }
        approx
    }

    /// Returns `true` if the value lies in `[0, 100]`.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        !self.0.is_negative() && self.0 <= *Self::hundred().get()
    }

    /// Returns the value clamped to `[0, 100]`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        if self.0.is_negative() {
            Self::zero()
        } else if self.0 > *Self::hundred().get() {
            Self::hundred()
        } else {
            self.clone()
        }
    }
}

/// The adjacent `f64` in the given direction.
fn next_f64(x: f64, rounding: Rounding) -> f64 {
    if x == 0.0 {
        let tiny = f64::from_bits(1);
        return if rounding.is_up() { tiny } else { -tiny };
    }
    // the bit pattern orders magnitudes
    let bits = x.to_bits();
    if (x > 0.0) == rounding.is_up() {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_f64())
    }
}
