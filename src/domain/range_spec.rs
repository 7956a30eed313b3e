//! Closed integer range `[min, max]`.

use core::fmt;

use super::ExactInteger;
use crate::error::{RatioError, Result};

/// A closed range of exact integers with `max >= min`.
///
/// A zero-width range (`min == max`) is a valid `RangeSpec` but cannot be
/// mapped to percentages; [`RangeMapper`](crate::math::RangeMapper)
/// rejects it at construction.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{ExactInteger, RangeSpec};
///
/// let range = RangeSpec::new(ExactInteger::from(10), ExactInteger::from(110)).expect("ordered");
/// assert_eq!(range.diff(), ExactInteger::from(100));
/// assert_eq!(range.clamp(&ExactInteger::from(500)), ExactInteger::from(110));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSpec {
    min: ExactInteger,
    max: ExactInteger,
}

impl RangeSpec {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::InvalidRange`] if `max < min`.
    pub fn new(min: ExactInteger, max: ExactInteger) -> Result<Self> {
        if max < min {
            return Err(RatioError::InvalidRange);
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> &ExactInteger {
        &self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> &ExactInteger {
        &self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn diff(&self) -> ExactInteger {
        &self.max - &self.min
    }

    /// Returns `true` if `min == max`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: &ExactInteger) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: &ExactInteger) -> ExactInteger {
        if *value < self.min {
            self.min.clone()
        } else if *value > self.max {
            self.max.clone()
        } else {
            value.clone()
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
