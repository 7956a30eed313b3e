//! Token identity type.

use serde::{Deserialize, Serialize};

use super::{Decimals, ExactInteger, TokenAddress};
use crate::error::Result;
use crate::math::{format_units, parse_units};

/// A fully resolved currency on a given chain.
///
/// Two tokens are equal only if symbol, chain, address and decimals all
/// match.  Symbols are stored as given; registry lookups compare them
/// case-insensitively.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{Decimals, Token, TokenAddress};
///
/// let usdc = Token::new(
///     "USDC",
///     11_155_111,
///     "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238".parse().expect("valid"),
///     Decimals::new(6).expect("valid"),
/// );
/// let raw = usdc.parse_amount("12.5").expect("valid amount");
/// assert_eq!(raw.to_string(), "12500000");
/// assert_eq!(usdc.format_amount(&raw), "12.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    symbol: String,
    chain_id: u64,
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    ///
    /// Construction is infallible because address and decimals are
    /// already validated at their own construction site.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        chain_id: u64,
        address: TokenAddress,
        decimals: Decimals,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            chain_id,
            address,
            decimals,
        }
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Chain the token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Contract address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Decimal places.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Parses a human-readable amount (`"12.5"`) into minor units.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::InvalidAmount`](crate::error::RatioError::InvalidAmount)
    /// if the text is malformed or more precise than the token allows.
    pub fn parse_amount(&self, text: &str) -> Result<ExactInteger> {
        parse_units(text, self.decimals)
    }

    /// Renders minor units as a human-readable amount.
    #[must_use]
    pub fn format_amount(&self, minor: &ExactInteger) -> String {
        format_units(minor, self.decimals)
    }
}
