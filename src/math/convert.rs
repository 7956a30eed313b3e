//! Price-feed conversion between currencies.
//!
//! A price API answers "one whole `base` is worth `rate` whole `quote`".
//! [`ExchangeRate`] keeps that rate as an exact rational together with the
//! decimals of both sides, so converting minor units never passes through
//! floating point:
//!
//! ```text
//! quote_minor = base_minor · rate · 10^quote_decimals / 10^base_decimals
//! ```

use core::fmt;

use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::trace;

use super::rounding::rational_round;
use super::units::parse_decimal;
use crate::domain::{Decimals, ExactInteger, Rounding};
use crate::error::{RatioError, Result};

/// Exact conversion rate between two currencies.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{Decimals, ExactInteger, Rounding};
/// use hypercert_ratio::math::ExchangeRate;
///
/// // 1 ETH = 2500.5 USDC
/// let rate = ExchangeRate::from_decimal_str(
///     "2500.5",
///     Decimals::new(18).expect("valid"),
///     Decimals::new(6).expect("valid"),
/// )
/// .expect("valid rate");
///
/// let half_eth = ExactInteger::pow10(17) * ExactInteger::from(5);
/// let usdc = rate.convert(&half_eth, Rounding::Down);
/// assert_eq!(usdc, ExactInteger::from(1_250_250_000u64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    rate: BigRational,
    base_decimals: Decimals,
    quote_decimals: Decimals,
}

impl ExchangeRate {
    /// Creates a rate from an exact rational.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::InvalidAmount`] if `rate` is negative.
    pub fn new(rate: BigRational, base_decimals: Decimals, quote_decimals: Decimals) -> Result<Self> {
        if rate.is_negative() {
            return Err(RatioError::InvalidAmount(rate.to_string()));
        }
        Ok(Self {
            rate,
            base_decimals,
            quote_decimals,
        })
    }

    /// Creates a rate from decimal text such as `"2500.5"`.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::InvalidAmount`] if the text is malformed or
    /// negative.
    pub fn from_decimal_str(
        rate: &str,
        base_decimals: Decimals,
        quote_decimals: Decimals,
    ) -> Result<Self> {
        Self::new(parse_decimal(rate)?, base_decimals, quote_decimals)
    }

    /// Creates a rate from a floating-point quote, taken at its exact
    /// binary value.
    ///
    /// # Errors
    ///
    /// - [`RatioError::NonFinite`] for `NaN` or infinities.
    /// - [`RatioError::InvalidAmount`] for negative rates.
    pub fn from_f64(rate: f64, base_decimals: Decimals, quote_decimals: Decimals) -> Result<Self> {
        let exact = BigRational::from_float(rate).ok_or(RatioError::NonFinite)?;
        Self::new(exact, base_decimals, quote_decimals)
    }

    /// Whole quote units per whole base unit.
    #[must_use]
    pub const fn rate(&self) -> &BigRational {
        &self.rate
    }

    /// Decimals of the currency being converted from.
    #[must_use]
    pub const fn base_decimals(&self) -> Decimals {
        self.base_decimals
    }

    /// Decimals of the currency being converted to.
    #[must_use]
    pub const fn quote_decimals(&self) -> Decimals {
        self.quote_decimals
    }

    /// Converts `amount` base minor units into quote minor units.
    #[must_use]
    pub fn convert(&self, amount: &ExactInteger, rounding: Rounding) -> ExactInteger {
        let exact = BigRational::from_integer(amount.get().clone())
            * &self.rate
            * BigRational::new(
                self.quote_decimals.factor().into_inner(),
                self.base_decimals.factor().into_inner(),
            );
        let converted = rational_round(&exact, rounding);
        trace!(%amount, %converted, %rounding, "converted amount");
        converted
    }

    /// Returns the reverse rate (quote → base).
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::DivisionByZero`] if the rate is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.rate.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self {
            rate: self.rate.recip(),
            base_decimals: self.quote_decimals,
            quote_decimals: self.base_decimals,
        })
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rate)
    }
}
