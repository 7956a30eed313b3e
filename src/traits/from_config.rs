//! Generic construction trait for building runtime types from configuration.
//!
//! [`FromConfig`] provides a uniform interface for turning a declarative
//! config struct into a validated runtime value.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be
//! usable without further checks.  Common validations include:
//!
//! - Range bounds parse as integers and are ordered with non-zero width
//! - Scale exponents are within the supported precision
//! - Registry entries are unique and reference known chains
//!
//! # Implementors
//!
//! ```text
//! impl FromConfig<RangeConfig>    for RangeMapper
//! impl FromConfig<RegistryConfig> for CurrencyRegistry
//! ```

use crate::error::RatioError;

/// Construction of `Self` from a configuration struct `C`.
///
/// The configuration is taken by reference because it may be reused
/// (e.g., for logging or to build several instances).
///
/// # Errors
///
/// Returns a [`RatioError`] describing the first invariant the
/// configuration violates.
pub trait FromConfig<C> {
    /// Creates a validated instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RatioError`] if any configured value is malformed or
    /// inconsistent.
    fn from_config(config: &C) -> Result<Self, RatioError>
    where
        Self: Sized;
}
