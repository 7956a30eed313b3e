//! Immutable chain and currency lookup tables.
//!
//! A [`CurrencyRegistry`] is built once at start-up from a
//! [`RegistryConfig`](crate::config::RegistryConfig) and then passed by
//! reference to whatever needs to resolve symbols or normalize token
//! configuration.  There is no global instance.
//!
//! # Usage
//!
//! ```rust
//! use hypercert_ratio::config::{RawTokenConfig, TokenConfig};
//! use hypercert_ratio::registry::CurrencyRegistry;
//!
//! let registry = CurrencyRegistry::from_toml_str(r#"
//! [[chains]]
//! id = 10
//! name = "Optimism"
//! native_symbol = "ETH"
//!
//! [[currencies]]
//! chain_id = 10
//! symbol = "USDC"
//! address = "0x0b2c639c533813f4aa9d7837caf62653d097ff85"
//! decimals = 6
//! "#).expect("valid registry");
//!
//! let raw = TokenConfig::Raw(RawTokenConfig { symbol: "usdc".into(), chain_id: 10 });
//! let token = registry.normalize(&raw).expect("known currency");
//! assert_eq!(token.decimals().get(), 6);
//! ```

mod currency_registry;

pub use currency_registry::CurrencyRegistry;
