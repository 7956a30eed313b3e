//! Declarative configuration structs.
//!
//! Everything here is plain data loaded from TOML.  Validation that spans
//! several entries happens when the runtime type is built through
//! [`FromConfig`](crate::traits::FromConfig).

mod chain;
mod range_config;
mod registry_config;
mod token_config;

pub use chain::ChainMetadata;
pub use range_config::RangeConfig;
pub use registry_config::RegistryConfig;
pub use token_config::{RawTokenConfig, TokenConfig};
