//! Fundamental domain value types.
//!
//! This module contains the value types the arithmetic operates on: exact
//! integers, ratio operands, percentages, ranges, and token identities.
//! All types use newtypes with validated constructors to enforce
//! invariants.

mod decimals;
mod exact_integer;
mod funding_progress;
mod operand;
mod percent;
mod range_spec;
mod rounding;
mod token;
mod token_address;

pub use decimals::Decimals;
pub use exact_integer::ExactInteger;
pub use funding_progress::FundingProgress;
pub use operand::Operand;
pub use percent::Percent;
pub use range_spec::RangeSpec;
pub use rounding::Rounding;
pub use token::Token;
pub use token_address::TokenAddress;
