//! Chain/currency registry implementation.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{ChainMetadata, RegistryConfig, TokenConfig};
use crate::domain::{Token, TokenAddress};
use crate::error::{RatioError, Result};
use crate::traits::FromConfig;

/// Read-only lookup tables for supported chains and currencies.
///
/// Symbols are matched case-insensitively.  Every currency belongs to a
/// registered chain, and within a chain both symbols and addresses are
/// unique.
///
/// # Thread Safety
///
/// The registry is never mutated after construction and can be shared
/// freely behind a reference or `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyRegistry {
    chains: BTreeMap<u64, ChainMetadata>,
    currencies: BTreeMap<(u64, String), Token>,
    by_address: BTreeMap<(u64, TokenAddress), String>,
}

fn symbol_key(symbol: &str) -> String {
    symbol.to_ascii_uppercase()
}

impl CurrencyRegistry {
    /// Builds a registry from chain and currency lists.
    ///
    /// # Errors
    ///
    /// - [`RatioError::InvalidConfiguration`] on a duplicate chain id,
    ///   duplicate symbol or duplicate address within a chain.
    /// - [`RatioError::UnknownChain`] if a currency names an unregistered
    ///   chain.
    pub fn new(chains: Vec<ChainMetadata>, currencies: Vec<Token>) -> Result<Self> {
        let mut registry = Self::default();
        for chain in chains {
            let id = chain.id;
            if registry.chains.insert(id, chain).is_some() {
                return Err(RatioError::InvalidConfiguration(format!(
                    "duplicate chain id {id}"
                )));
            }
        }
        for token in currencies {
            let chain_id = token.chain_id();
            if !registry.chains.contains_key(&chain_id) {
                return Err(RatioError::UnknownChain(chain_id));
            }
            let key = symbol_key(token.symbol());
            if registry
                .by_address
                .insert((chain_id, token.address()), key.clone())
                .is_some()
            {
                return Err(RatioError::InvalidConfiguration(format!(
                    "duplicate address {} on chain {chain_id}",
                    token.address()
                )));
            }
            if registry.currencies.insert((chain_id, key), token).is_some() {
                return Err(RatioError::InvalidConfiguration(format!(
                    "duplicate currency symbol on chain {chain_id}"
                )));
            }
        }
        info!(
            chains = registry.chains.len(),
            currencies = registry.currencies.len(),
            "currency registry loaded"
        );
        Ok(registry)
    }

    /// Parses a TOML registry document and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ConfigParse`] for malformed documents and any
    /// error [`new`](Self::new) reports.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::from_config(&RegistryConfig::from_toml_str(text)?)
    }

    /// Reads a TOML registry file and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ConfigRead`] if the file cannot be read, plus
    /// everything [`from_toml_str`](Self::from_toml_str) reports.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&RegistryConfig::from_path(path)?)
    }

    /// Looks up a chain.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::UnknownChain`] if the id is not registered.
    pub fn chain(&self, id: u64) -> Result<&ChainMetadata> {
        self.chains.get(&id).ok_or(RatioError::UnknownChain(id))
    }

    /// All registered chains in id order.
    pub fn chains(&self) -> impl Iterator<Item = &ChainMetadata> {
        self.chains.values()
    }

    /// Looks up a currency by symbol on a chain.
    ///
    /// # Errors
    ///
    /// - [`RatioError::UnknownChain`] if the chain is not registered.
    /// - [`RatioError::UnknownCurrency`] if the symbol is not registered
    ///   on that chain.
    pub fn currency(&self, chain_id: u64, symbol: &str) -> Result<&Token> {
        self.chain(chain_id)?;
        self.currencies
            .get(&(chain_id, symbol_key(symbol)))
            .ok_or_else(|| RatioError::UnknownCurrency {
                chain_id,
                symbol: symbol.to_string(),
            })
    }

    /// All currencies registered on `chain_id`.
    pub fn currencies_on(&self, chain_id: u64) -> impl Iterator<Item = &Token> {
        self.currencies
            .range((chain_id, String::new())..)
            .take_while(move |((id, _), _)| *id == chain_id)
            .map(|(_, token)| token)
    }

    /// Reverse lookup: the symbol registered for `address` on `chain_id`.
    #[must_use]
    pub fn symbol_for_address(&self, chain_id: u64, address: &TokenAddress) -> Option<&str> {
        let key = self.by_address.get(&(chain_id, *address))?;
        self.currencies
            .get(&(chain_id, key.clone()))
            .map(Token::symbol)
    }

    /// Resolves a token configuration to a complete [`Token`].
    ///
    /// # Errors
    ///
    /// - [`RatioError::UnknownChain`] if the configured chain is not
    ///   registered.
    /// - [`RatioError::UnknownCurrency`] if a raw symbol cannot be
    ///   resolved.
    pub fn normalize(&self, config: &TokenConfig) -> Result<Token> {
        let token = match config {
            TokenConfig::Raw(raw) => self.currency(raw.chain_id, &raw.symbol)?.clone(),
            TokenConfig::Normalized(token) => {
                self.chain(token.chain_id())?;
                token.clone()
            }
        };
        debug!(%config, address = %token.address(), "token config normalized");
        Ok(token)
    }
}

impl FromConfig<RegistryConfig> for CurrencyRegistry {
    fn from_config(config: &RegistryConfig) -> Result<Self> {
        Self::new(config.chains.clone(), config.currencies.clone())
    }
}
