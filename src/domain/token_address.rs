//! EVM token contract address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RatioError;

/// Length of an EVM address in bytes.
const ADDRESS_LEN: usize = 20;

/// A 20-byte EVM contract address.
///
/// Parses from `0x`-prefixed hex in any letter case and displays as
/// lowercase hex.  Checksums are not verified.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::TokenAddress;
///
/// let addr: TokenAddress = "0x1C7D4B196Cb0C7B01d743Fbc6116a902379C7238".parse().expect("valid");
/// assert_eq!(addr.to_string(), "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAddress([u8; ADDRESS_LEN]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Returns the all-zero address, used by price feeds for the native
    /// currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for TokenAddress {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| RatioError::InvalidAddress(s.to_string()))?;
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|_| RatioError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = RatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenAddress> for String {
    fn from(value: TokenAddress) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
