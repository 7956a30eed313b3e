//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hypercert_ratio::prelude::*;
//!
//! let p = percentage(Some(1), Some(3)).expect("valid");
//! assert_eq!(p, Some(33.0));
//! ```

pub use crate::domain::{
    Decimals, ExactInteger, FundingProgress, Operand, Percent, RangeSpec, Rounding, Token,
    TokenAddress,
};

pub use crate::traits::FromConfig;

pub use crate::math::{
    div_round, format_magnitude, format_units, parse_units, percentage, percentage_exact,
    ExchangeRate, RangeMapper,
};

pub use crate::config::{ChainMetadata, RangeConfig, RegistryConfig, TokenConfig};

pub use crate::registry::CurrencyRegistry;

pub use crate::error::{RatioError, Result};
