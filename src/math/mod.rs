//! Exact arithmetic over token quantities.
//!
//! This module provides the ratio and range-mapping operations together
//! with the unit, display, and exchange-rate helpers that feed them.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`percentage`] | `numerator · 100 / denominator` without float error |
//! | [`RangeMapper`] | value ⇄ percent over a fixed `[min, max]` |
//! | [`div_round`] | integer division with explicit [`Rounding`](crate::domain::Rounding) |
//! | [`parse_units`] / [`format_units`] | decimal text ⇄ minor units |
//! | [`format_magnitude`] | exponent rendering for very large values |
//! | [`ExchangeRate`] | exact price-feed conversion |

mod convert;
mod display;
mod range_map;
mod ratio;
mod rounding;
mod units;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use convert::ExchangeRate;
pub use display::{format_magnitude, EXPONENT_THRESHOLD};
pub use range_map::{RangeMapper, DEFAULT_SCALE_EXPONENT, MAX_SCALE_EXPONENT};
pub use ratio::{percentage, percentage_exact};
pub use rounding::div_round;
pub(crate) use rounding::div_round_nonzero;
pub use units::{format_units, parse_units};
