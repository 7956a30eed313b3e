//! Token decimal places.

use serde::{Deserialize, Serialize};

use super::{ExactInteger, Rounding};
use crate::error::RatioError;
use crate::math::div_round_nonzero;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=18`, matching the common EVM token standard.
/// Construction is validated: values above 18 are rejected, including
/// when deserialized from configuration.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, RatioError> {
        if value > MAX_DECIMALS {
            return Err(RatioError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole-token amount to minor units.
    ///
    /// With `decimals = 6`, an input of `1` yields `1_000_000`.
    #[must_use]
    pub fn scale_up(&self, whole: &ExactInteger) -> ExactInteger {
        whole * &self.factor()
    }

    /// Converts minor units back to whole tokens, discarding the fraction
    /// in the given direction.
    #[must_use]
    pub fn scale_down(&self, minor: &ExactInteger, rounding: Rounding) -> ExactInteger {
        div_round_nonzero(minor, &self.factor(), rounding)
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn factor(&self) -> ExactInteger {
        ExactInteger::pow10(u32::from(self.0))
    }
}

impl TryFrom<u8> for Decimals {
    type Error = RatioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
