//! Chain metadata.

use serde::{Deserialize, Serialize};

/// Static description of a supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainMetadata {
    /// EIP-155 chain id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Symbol of the native gas currency.
    pub native_symbol: String,
    /// Whether the chain is a test network.
    #[serde(default)]
    pub testnet: bool,
}

impl ChainMetadata {
    /// Creates chain metadata.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, native_symbol: impl Into<String>, testnet: bool) -> Self {
        Self {
            id,
            name: name.into(),
            native_symbol: native_symbol.into(),
            testnet,
        }
    }
}
