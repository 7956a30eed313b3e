//! Arbitrary-precision signed integer value type.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::RatioError;

/// An arbitrary-precision signed integer.
///
/// Token quantities in minor units routinely exceed `u64` (an 18-decimal
/// token holding one billion whole units is already `10^27`), so every
/// quantity in the crate is carried as an `ExactInteger`.
///
/// Parsing accepts an optional sign followed by ASCII digits; surrounding
/// ASCII whitespace is ignored.  Everything else, including the empty
/// string, fails with [`RatioError::Parse`].
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::ExactInteger;
///
/// let wei: ExactInteger = "1000000000000000000000000000".parse().expect("valid");
/// assert_eq!(wei.to_string(), "1000000000000000000000000000");
/// assert!("12.5".parse::<ExactInteger>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExactInteger(BigInt);

impl ExactInteger {
    /// Wraps a [`BigInt`].
    #[must_use]
    pub const fn new(value: BigInt) -> Self {
        Self(value)
    }

    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Returns `10^exponent`.
    #[must_use]
    pub fn pow10(exponent: u32) -> Self {
        Self(BigInt::from(10u8).pow(exponent))
    }

    /// Returns a reference to the underlying [`BigInt`].
    #[must_use]
    pub const fn get(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying [`BigInt`].
    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Narrows to the nearest `f64`.
    ///
    /// Magnitudes beyond `f64::MAX` saturate to the matching infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.0.to_f64() {
            Some(v) => v,
            None if self.0.is_negative() => f64::NEG_INFINITY,
            None => f64::INFINITY,
        }
    }
}

impl FromStr for ExactInteger {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RatioError::Parse(s.to_string()));
        }
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| RatioError::Parse(s.to_string()))?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for ExactInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BigInt> for ExactInteger {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<ExactInteger> for BigInt {
    fn from(value: ExactInteger) -> Self {
        value.0
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ExactInteger {
                fn from(value: $t) -> Self {
                    Self(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, i128, u8, u32, u64, u128, usize);

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl $trait for ExactInteger {
            type Output = ExactInteger;

            fn $method(self, rhs: ExactInteger) -> ExactInteger {
                ExactInteger(self.0.$method(rhs.0))
            }
        }

        impl<'a> $trait<&'a ExactInteger> for &'a ExactInteger {
            type Output = ExactInteger;

            fn $method(self, rhs: &'a ExactInteger) -> ExactInteger {
                ExactInteger((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl Neg for ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        ExactInteger(-self.0)
    }
}
