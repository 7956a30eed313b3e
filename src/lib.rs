//! # Hypercert Ratio
//!
//! Exact-ratio arithmetic for hypercert marketplaces: funding progress
//! percentages, range sliders over token quantities, and price-feed
//! conversions, all computed on arbitrary-precision integers.
//!
//! Token quantities routinely exceed 10^18 minor units, well past the
//! 2^53 limit where `f64` stops representing integers.  Every operation
//! here keeps the arithmetic in [`BigInt`](num_bigint::BigInt) or
//! [`BigRational`](num_rational::BigRational) and only narrows to `f64`
//! for the final, already-rounded result.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `logging` | no | [`init_tracing`](logging::init_tracing) subscriber setup via `tracing-subscriber` |
//!
//! # Quick Start
//!
//! ```toml
//! [dependencies]
//! hypercert-ratio = "0.1"
//! ```
//!
//! ## Funding progress
//!
//! ```rust
//! use hypercert_ratio::math::percentage;
//!
//! // 3 of 4 ETH raised, in wei
//! let raised = "3000000000000000000";
//! let target = "4000000000000000000";
//! assert_eq!(percentage(Some(raised), Some(target)).expect("valid"), Some(75.0));
//!
//! // No target yet
//! assert_eq!(percentage(Some(raised), None::<&str>).expect("valid"), None);
//! ```
//!
//! ## Range slider
//!
//! ```rust
//! use hypercert_ratio::domain::{ExactInteger, RangeSpec};
//! use hypercert_ratio::math::RangeMapper;
//!
//! let unit = ExactInteger::pow10(18);
//! let range = RangeSpec::new(unit.clone(), &unit * &ExactInteger::from(11))
//!     .expect("ordered");
//! let mapper = RangeMapper::new(range).expect("non-empty");
//!
//! let half = &unit * &ExactInteger::from(6);
//! let percent = mapper.value_to_percent(&half);
//! assert_eq!(percent.as_f64(), 50.0);
//! assert_eq!(mapper.percent_to_value(&percent), half);
//! assert_eq!(mapper.step(), ExactInteger::pow10(17));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`ExactInteger`](domain::ExactInteger), [`Percent`](domain::Percent), [`RangeSpec`](domain::RangeSpec), [`Token`](domain::Token), etc. |
//! | [`math`]   | [`percentage`](math::percentage), [`RangeMapper`](math::RangeMapper), units, display, [`ExchangeRate`](math::ExchangeRate) |
//! | [`config`] | Declarative TOML structs: [`RangeConfig`](config::RangeConfig), [`RegistryConfig`](config::RegistryConfig), [`TokenConfig`](config::TokenConfig) |
//! | [`registry`] | [`CurrencyRegistry`](registry::CurrencyRegistry) chain and currency lookups |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) construction seam |
//! | [`error`]  | [`RatioError`](error::RatioError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod math;
pub mod prelude;
pub mod registry;
pub mod traits;
