//! Unified error type for the crate.
//!
//! Every fallible operation returns [`RatioError`]. Indeterminate results
//! (absent inputs, zero denominators) are not errors: they surface as
//! `Ok(None)` from the operations that can produce them.

use thiserror::Error;

/// Errors produced by ratio arithmetic, unit parsing, and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// Text that was expected to hold an integer did not parse as one.
    #[error("invalid integer literal: {0:?}")]
    Parse(String),

    /// Text that was expected to hold a decimal amount did not parse, or
    /// carried more fractional digits than the token allows.
    #[error("invalid decimal amount: {0:?}")]
    InvalidAmount(String),

    /// A range was built with `max < min`.
    #[error("invalid range: max must not be below min")]
    InvalidRange,

    /// A range mapper was built over a range where `max == min`.
    #[error("range has zero width")]
    ZeroWidthRange,

    /// A percentage or rate was `NaN` or infinite.
    #[error("value is not finite")]
    NonFinite,

    /// A precision parameter (decimals, scale exponent) is out of bounds.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Division by a zero quantity.
    #[error("division by zero")]
    DivisionByZero,

    /// A hex address was malformed or had the wrong length.
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    /// A configuration document is structurally valid but inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No chain with this id is registered.
    #[error("unknown chain id {0}")]
    UnknownChain(u64),

    /// No currency with this symbol is registered on the chain.
    #[error("unknown currency {symbol} on chain {chain_id}")]
    UnknownCurrency {
        /// Chain the lookup was performed on.
        chain_id: u64,
        /// Symbol that was not found.
        symbol: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigRead(String),

    /// A configuration document could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, RatioError>;
