//! Ratio-to-percentage conversion.
//!
//! [`percentage`] turns two arbitrary-precision quantities (raised funds
//! over a funding target, a slider value over its range) into a percentage
//! without routing through floating point.  Dividing the `f64` images of
//! two 10^30-scale integers silently drops everything past the 53rd bit;
//! multiplying by 100 and dividing as integers does not.
//!
//! # Result shape
//!
//! | Input | Result |
//! |-------|--------|
//! | either side `None` | `Ok(None)` |
//! | denominator `0` or `"0"` | `Ok(None)` |
//! | malformed text | `Err(RatioError::Parse)` |
//! | otherwise | `Ok(Some(⌊numerator · 100 / denominator⌋))` |

use tracing::trace;

use crate::domain::{ExactInteger, Operand};
use crate::error::Result;

/// Computes `numerator * 100 / denominator` exactly, truncated toward zero.
///
/// # Errors
///
/// Returns [`RatioError::Parse`](crate::error::RatioError::Parse) if either
/// operand is text that does not parse as an integer.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::math::percentage_exact;
/// use hypercert_ratio::domain::ExactInteger;
///
/// let p = percentage_exact(Some("1"), Some("3")).expect("valid");
/// assert_eq!(p, Some(ExactInteger::from(33)));
/// ```
pub fn percentage_exact<N, D>(
    numerator: Option<N>,
    denominator: Option<D>,
) -> Result<Option<ExactInteger>>
where
    N: Into<Operand>,
    D: Into<Operand>,
{
    let (Some(numerator), Some(denominator)) = (numerator, denominator) else {
        trace!("percentage indeterminate: missing operand");
        return Ok(None);
    };
    let numerator = numerator.into().resolve()?;
    let denominator = denominator.into().resolve()?;
    if denominator.is_zero() {
        trace!(%numerator, "percentage indeterminate: zero denominator");
        return Ok(None);
    }
    let scaled = numerator.into_inner() * 100u8;
    // BigInt division truncates toward zero
    Ok(Some(ExactInteger::new(scaled / denominator.get())))
}

/// Computes the integer percentage `numerator * 100 / denominator` and
/// returns it as an `f64`.
///
/// The division happens in exact integer arithmetic; only the final,
/// already-truncated percentage is narrowed.
///
/// # Errors
///
/// Returns [`RatioError::Parse`](crate::error::RatioError::Parse) if either
/// operand is text that does not parse as an integer.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::math::percentage;
///
/// assert_eq!(percentage(Some(100), Some(1000)).expect("valid"), Some(10.0));
/// assert_eq!(percentage(Some("100"), Some("0")).expect("valid"), None);
/// assert_eq!(percentage(None::<i32>, Some(1000)).expect("valid"), None);
/// assert!(percentage(Some("invalid"), Some("1000")).is_err());
/// ```
pub fn percentage<N, D>(numerator: Option<N>, denominator: Option<D>) -> Result<Option<f64>>
where
    N: Into<Operand>,
    D: Into<Operand>,
{
    Ok(percentage_exact(numerator, denominator)?.map(|p| p.to_f64()))
}
