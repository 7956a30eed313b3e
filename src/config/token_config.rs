//! Tagged token configuration.
//!
//! Currency settings arrive in two shapes: a bare `(symbol, chain)` that
//! must be resolved through the [`CurrencyRegistry`](crate::registry::CurrencyRegistry),
//! and a fully specified token.  [`TokenConfig`] models the two as a sum
//! type so a normalizer has to handle both explicitly:
//!
//! ```text
//! match config {
//!     TokenConfig::Raw(raw)          => registry.currency(raw.chain_id, &raw.symbol),
//!     TokenConfig::Normalized(token) => token,
//! }
//! ```
//!
//! In TOML the variant is selected by a `kind` field:
//!
//! ```toml
//! kind = "raw"
//! symbol = "USDC"
//! chain_id = 10
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Token;
use crate::error::{RatioError, Result};

/// A currency reference that still needs registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawTokenConfig {
    /// Ticker symbol, matched case-insensitively.
    pub symbol: String,
    /// Chain to resolve the symbol on.
    pub chain_id: u64,
}

/// Token configuration in raw or normalized form.
///
/// # Variants
///
/// - [`Raw`](TokenConfig::Raw): symbol and chain only.
/// - [`Normalized`](TokenConfig::Normalized): address and decimals given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenConfig {
    /// Resolved through the registry.
    Raw(RawTokenConfig),
    /// Already complete.
    Normalized(Token),
}

impl TokenConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ConfigParse`] if the document is malformed or
    /// names an unknown `kind`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RatioError::ConfigParse(e.to_string()))
    }

    /// Ticker symbol in either form.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Raw(raw) => &raw.symbol,
            Self::Normalized(token) => token.symbol(),
        }
    }

    /// Chain id in either form.
    #[must_use]
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Raw(raw) => raw.chain_id,
            Self::Normalized(token) => token.chain_id(),
        }
    }

    /// Returns `true` if this is a [`Raw`](Self::Raw) variant.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Returns `true` if this is a [`Normalized`](Self::Normalized) variant.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized(_))
    }
}

impl core::fmt::Display for TokenConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Raw(raw) => write!(f, "Raw({}@{})", raw.symbol, raw.chain_id),
            Self::Normalized(token) => write!(
                f,
                "Normalized({}@{} {})",
                token.symbol(),
                token.chain_id(),
                token.address()
            ),
        }
    }
}
