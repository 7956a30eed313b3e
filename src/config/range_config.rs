//! Configuration for percentage range mapping.

use serde::{Deserialize, Serialize};

use crate::error::{RatioError, Result};
use crate::math::DEFAULT_SCALE_EXPONENT;

fn default_scale_exponent() -> u32 {
    DEFAULT_SCALE_EXPONENT
}

/// Declarative description of a [`RangeMapper`](crate::math::RangeMapper).
///
/// Bounds are decimal strings because range limits are token quantities in
/// minor units and routinely overflow TOML's 64-bit integers.
///
/// ```toml
/// min = "0"
/// max = "5000000000000000000000"
/// scale_exponent = 30   # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Lower bound, decimal integer text.
    pub min: String,
    /// Upper bound, decimal integer text.
    pub max: String,
    /// `k` in `SCALE = 10^k`.
    #[serde(default = "default_scale_exponent")]
    pub scale_exponent: u32,
}

impl RangeConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ConfigParse`] if the document is malformed.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RatioError::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_default_scale() {
        let Ok(cfg) = RangeConfig::from_toml_str("min = \"0\"\nmax = \"100\"\n") else {
            panic!("valid document");
        };
        assert_eq!(cfg.min, "0");
        assert_eq!(cfg.max, "100");
        assert_eq!(cfg.scale_exponent, DEFAULT_SCALE_EXPONENT);
    }

    #[test]
    fn parse_explicit_scale() {
        let doc = "min = \"-5\"\nmax = \"5\"\nscale_exponent = 12\n";
        let Ok(cfg) = RangeConfig::from_toml_str(doc) else {
            panic!("valid document");
        };
        assert_eq!(cfg.scale_exponent, 12);
    }

    #[test]
    fn missing_field_rejected() {
        let Err(e) = RangeConfig::from_toml_str("min = \"0\"\n") else {
            panic!("expected parse error");
        };
        assert!(matches!(e, RatioError::ConfigParse(_)));
    }
}
