//! Ratio inputs that may arrive as integers or as unparsed text.

use num_bigint::BigInt;

use super::ExactInteger;
use crate::error::Result;

/// One side of a ratio.
///
/// Amounts reach the arithmetic core either already parsed or as decimal
/// strings straight from an indexer response.  Text is parsed lazily by
/// [`resolve`](Self::resolve), which is where a malformed string surfaces
/// as an error.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{ExactInteger, Operand};
///
/// let from_text = Operand::from("1000");
/// let from_int = Operand::from(1000);
/// assert_eq!(from_text.resolve().ok(), from_int.resolve().ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// An already-parsed integer.
    Integer(ExactInteger),
    /// Decimal text, parsed on demand.
    Text(String),
}

impl Operand {
    /// Produces the integer value of this operand.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::Parse`](crate::error::RatioError::Parse) if the
    /// operand is text that is not an integer literal.
    pub fn resolve(&self) -> Result<ExactInteger> {
        match self {
            Self::Integer(value) => Ok(value.clone()),
            Self::Text(text) => text.parse(),
        }
    }
}

impl From<ExactInteger> for Operand {
    fn from(value: ExactInteger) -> Self {
        Self::Integer(value)
    }
}

impl From<&ExactInteger> for Operand {
    fn from(value: &ExactInteger) -> Self {
        Self::Integer(value.clone())
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Self::Integer(ExactInteger::new(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Integer(ExactInteger::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, i128, u32, u64, u128);
