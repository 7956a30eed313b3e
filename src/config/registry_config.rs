//! Registry document: chains and currencies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ChainMetadata;
use crate::domain::Token;
use crate::error::{RatioError, Result};

/// Declarative contents of a [`CurrencyRegistry`](crate::registry::CurrencyRegistry).
///
/// Deserialization only checks shape and per-field validity (address
/// hex, decimal range).  Cross-entry consistency is checked when the
/// registry is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Supported chains.
    #[serde(default)]
    pub chains: Vec<ChainMetadata>,
    /// Currencies, each on one of `chains`.
    #[serde(default)]
    pub currencies: Vec<Token>,
}

impl RegistryConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ConfigParse`] if the document is malformed.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RatioError::ConfigParse(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// - [`RatioError::ConfigRead`] if the file cannot be read.
    /// - [`RatioError::ConfigParse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| RatioError::ConfigRead(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
