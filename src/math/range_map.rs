//! Bidirectional mapping between range positions and percentages.
//!
//! A [`RangeMapper`] fixes a [`RangeSpec`] and a precision
//! `SCALE = 10^k` and converts values inside (or outside) the range to a
//! [`Percent`] and back.
//!
//! # Conversions
//!
//! ```text
//! value → percent:  q = (value − min) · 100 · SCALE / diff  rounded away from zero,  percent = q / SCALE
//! percent → value:  s = round(percent · SCALE),  value = trunc(diff · s / (100 · SCALE)) + min
//! ```
//!
//! The inverse truncates toward zero.  Rounding the forward quotient away
//! from zero makes the pair an exact inverse whenever `diff ≤ 100 · SCALE`,
//! on both sides of `min`: the forward error is below one `SCALE` step and
//! always on the side truncation removes.
//!
//! The `f64` entry points keep that property.  `value_to_percent_f64`
//! narrows away from zero as well, so the float it returns is never closer
//! to zero than the exact percentage, and `percent_to_value_f64` takes the
//! float at its exact binary value.  The round-trip through `f64` is exact
//! while the range is narrow enough for one ULP of the percentage to stay
//! below one unit of value (about `diff < 10^14`).
//!
//! Neither direction clamps.  A value below `min` maps to a negative
//! percentage and a percentage above 100 maps past `max`.

use num_rational::BigRational;
use tracing::debug;

use super::rounding::{div_away_from_zero, div_round_nonzero, div_truncate, round_half_away};
use crate::config::RangeConfig;
use crate::domain::{ExactInteger, Percent, RangeSpec, Rounding};
use crate::error::{RatioError, Result};
use crate::traits::FromConfig;

/// Default scale exponent: percentages carry 30 fractional digits.
pub const DEFAULT_SCALE_EXPONENT: u32 = 30;

/// Largest accepted scale exponent.
pub const MAX_SCALE_EXPONENT: u32 = 60;

/// Converts between values in a fixed range and percentage positions.
///
/// Construction rejects zero-width ranges, so every conversion is total.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{ExactInteger, RangeSpec};
/// use hypercert_ratio::math::RangeMapper;
///
/// let range = RangeSpec::new(ExactInteger::zero(), ExactInteger::pow10(24)).expect("ordered");
/// let mapper = RangeMapper::new(range).expect("non-empty");
///
/// let value = ExactInteger::pow10(23);
/// let percent = mapper.value_to_percent(&value);
/// assert_eq!(percent.as_f64(), 10.0);
/// assert_eq!(mapper.percent_to_value(&percent), value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMapper {
    range: RangeSpec,
    diff: ExactInteger,
    scale_exponent: u32,
    scale: ExactInteger,
}

impl RangeMapper {
    /// Creates a mapper with the default precision (`SCALE = 10^30`).
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroWidthRange`] if `min == max`.
    pub fn new(range: RangeSpec) -> Result<Self> {
        Self::with_scale_exponent(range, DEFAULT_SCALE_EXPONENT)
    }

    /// Creates a mapper with `SCALE = 10^scale_exponent`.
    ///
    /// # Errors
    ///
    /// - [`RatioError::ZeroWidthRange`] if `min == max`.
    /// - [`RatioError::InvalidPrecision`] if `scale_exponent` is not in
    ///   `1..=60`.
    pub fn with_scale_exponent(range: RangeSpec, scale_exponent: u32) -> Result<Self> {
        if scale_exponent == 0 || scale_exponent > MAX_SCALE_EXPONENT {
            return Err(RatioError::InvalidPrecision(
                "scale exponent must be 1..=60",
            ));
        }
        if range.is_empty() {
            return Err(RatioError::ZeroWidthRange);
        }
        let diff = range.diff();
        debug!(%range, scale_exponent, "range mapper created");
        Ok(Self {
            range,
            diff,
            scale_exponent,
            scale: ExactInteger::pow10(scale_exponent),
        })
    }

    /// The mapped range.
    #[must_use]
    pub const fn range(&self) -> &RangeSpec {
        &self.range
    }

    /// `max - min`; always positive.
    #[must_use]
    pub const fn diff(&self) -> &ExactInteger {
        &self.diff
    }

    /// The `k` in `SCALE = 10^k`.
    #[must_use]
    pub const fn scale_exponent(&self) -> u32 {
        self.scale_exponent
    }

    /// Maps `value` to its percentage position in the range.
    #[must_use]
    pub fn value_to_percent(&self, value: &ExactInteger) -> Percent {
        let offset = value - self.range.min();
        let numerator = &(&offset * &ExactInteger::from(100)) * &self.scale;
        let scaled = div_away_from_zero(&numerator, &self.diff);
        Percent::new(BigRational::new(
            scaled.into_inner(),
            self.scale.get().clone(),
        ))
    }

    /// Maps `value` to its percentage position, narrowed to `f64` away
    /// from zero so that [`percent_to_value_f64`](Self::percent_to_value_f64)
    /// recovers `value`.
    #[must_use]
    pub fn value_to_percent_f64(&self, value: &ExactInteger) -> f64 {
        let percent = self.value_to_percent(value);
        let direction = if percent < Percent::zero() {
            Rounding::Down
        } else {
            Rounding::Up
        };
        percent.as_f64_directed(direction)
    }

    /// Maps a percentage position back to a value, truncating toward zero
    /// relative to `min`.
    #[must_use]
    pub fn percent_to_value(&self, percent: &Percent) -> ExactInteger {
        let scaled = round_half_away(&(percent.get() * BigRational::from_integer(
            self.scale.get().clone(),
        )));
        let numerator = &self.diff * &scaled;
        let denominator = &ExactInteger::from(100) * &self.scale;
        let offset = div_truncate(&numerator, &denominator);
        &offset + self.range.min()
    }

    /// Maps an `f64` percentage position back to a value.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::NonFinite`] if `percent` is `NaN` or infinite.
    pub fn percent_to_value_f64(&self, percent: f64) -> Result<ExactInteger> {
        Ok(self.percent_to_value(&Percent::from_f64(percent)?))
    }

    /// Keyboard increment: one percent of the range, truncated.
    ///
    /// Ranges narrower than 100 units have a zero step.
    #[must_use]
    pub fn step(&self) -> ExactInteger {
        div_round_nonzero(&self.diff, &ExactInteger::from(100), Rounding::Down)
    }

    /// `value + step()`, not clamped.
    #[must_use]
    pub fn step_up(&self, value: &ExactInteger) -> ExactInteger {
        value + &self.step()
    }

    /// `value - step()`, not clamped.
    #[must_use]
    pub fn step_down(&self, value: &ExactInteger) -> ExactInteger {
        value - &self.step()
    }
}

impl FromConfig<RangeConfig> for RangeMapper {
    fn from_config(config: &RangeConfig) -> Result<Self> {
        let min: ExactInteger = config.min.parse()?;
        let max: ExactInteger = config.max.parse()?;
        Self::with_scale_exponent(RangeSpec::new(min, max)?, config.scale_exponent)
    }
}
