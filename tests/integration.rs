//! Integration tests exercising the full system from config to display.
//!
//! These tests verify end-to-end flows through the public API: registry
//! loading, token normalization, amount parsing, funding progress, range
//! sliders built from configuration, and price conversion.

#![allow(clippy::panic)]

use hypercert_ratio::config::{RangeConfig, RawTokenConfig, TokenConfig};
use hypercert_ratio::domain::{ExactInteger, FundingProgress, Percent, Rounding, Token};
use hypercert_ratio::error::RatioError;
use hypercert_ratio::math::{format_magnitude, percentage, percentage_exact, ExchangeRate, RangeMapper};
use hypercert_ratio::registry::CurrencyRegistry;
use hypercert_ratio::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const REGISTRY: &str = r#"
[[chains]]
id = 11155111
name = "Sepolia"
native_symbol = "ETH"
testnet = true

[[chains]]
id = 10
name = "Optimism"
native_symbol = "ETH"

[[currencies]]
chain_id = 11155111
symbol = "USDC"
address = "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238"
decimals = 6

[[currencies]]
chain_id = 11155111
symbol = "WETH"
address = "0x7b79995e5f793a07bc00c21412e50ecae098e7f9"
decimals = 18

[[currencies]]
chain_id = 10
symbol = "USDC"
address = "0x0b2c639c533813f4aa9d7837caf62653d097ff85"
decimals = 6
"#;

const SEPOLIA: u64 = 11_155_111;

fn registry() -> CurrencyRegistry {
    let Ok(r) = CurrencyRegistry::from_toml_str(REGISTRY) else {
        panic!("valid registry");
    };
    r
}

fn currency(registry: &CurrencyRegistry, symbol: &str) -> Token {
    let cfg = TokenConfig::Raw(RawTokenConfig {
        symbol: symbol.to_string(),
        chain_id: SEPOLIA,
    });
    let Ok(token) = registry.normalize(&cfg) else {
        panic!("registered currency {symbol}");
    };
    token
}

fn amount(token: &Token, text: &str) -> ExactInteger {
    let Ok(v) = token.parse_amount(text) else {
        panic!("valid amount {text}");
    };
    v
}

// ---------------------------------------------------------------------------
// Funding progress
// ---------------------------------------------------------------------------

#[test]
fn funding_progress_from_human_amounts() {
    let reg = registry();
    let weth = currency(&reg, "weth");

    let raised = amount(&weth, "2.5");
    let target = amount(&weth, "10");
    let progress = FundingProgress::new(raised.clone(), Some(target.clone()));

    assert_eq!(progress.percentage(), Some(25.0));
    assert_eq!(progress.display_percentage(), Some(25.0));
    let Some(remaining) = progress.remaining() else {
        panic!("target set");
    };
    assert_eq!(weth.format_amount(&remaining), "7.5");

    // text operands taken straight from an API payload agree
    let text = percentage(Some(raised.to_string()), Some(target.to_string()));
    assert_eq!(text, Ok(Some(25.0)));
}

#[test]
fn over_funded_listing_is_clamped_for_display() {
    let reg = registry();
    let usdc = currency(&reg, "USDC");
    let progress = FundingProgress::new(amount(&usdc, "1500"), Some(amount(&usdc, "1000")));

    assert_eq!(progress.percentage(), Some(150.0));
    assert_eq!(progress.display_percentage(), Some(100.0));
    assert!(progress.is_fully_funded());
}

#[test]
fn listing_without_target_has_no_progress() {
    let progress = FundingProgress::new(ExactInteger::from(5), None);
    assert_eq!(progress.percentage(), None);
    assert_eq!(progress.remaining(), None);
    assert!(!progress.is_fully_funded());

    let zero_target = FundingProgress::new(ExactInteger::from(5), Some(ExactInteger::zero()));
    assert_eq!(zero_target.percentage(), None);
}

#[test]
fn percentage_beyond_float_precision() {
    let numerator = "12345678901234567890123456789012345678901234567890";
    let Ok(Some(exact)) = percentage_exact(Some(numerator), Some(9_007_199_254_740_993u64)) else {
        panic!("defined");
    };
    assert_eq!(exact.to_string(), "137064569707796196856605771675079198");
}

#[test]
fn malformed_payload_is_an_error() {
    let r = percentage(Some("12abc"), Some("100"));
    assert!(matches!(r, Err(RatioError::Parse(_))));
}

// ---------------------------------------------------------------------------
// Range slider
// ---------------------------------------------------------------------------

#[test]
fn slider_from_config_round_trips_token_amounts() {
    let reg = registry();
    let weth = currency(&reg, "WETH");
    let Ok(cfg) = RangeConfig::from_toml_str(
        "min = \"1000000000000000000\"\nmax = \"5000000000000000000000\"\n",
    ) else {
        panic!("valid range config");
    };
    let Ok(mapper) = RangeMapper::from_config(&cfg) else {
        panic!("valid range");
    };

    for text in ["1", "1.5", "123.456789", "2500", "4999.999999999999999999", "5000"] {
        let value = amount(&weth, text);
        let percent = mapper.value_to_percent(&value);
        assert!(percent.is_within_bounds(), "{text} inside range");
        assert_eq!(mapper.percent_to_value(&percent), value, "{text} round trip");
    }

    assert_eq!(mapper.value_to_percent(mapper.range().min()), Percent::zero());
    assert_eq!(mapper.value_to_percent(mapper.range().max()), Percent::hundred());
}

#[test]
fn slider_keyboard_steps() {
    let Ok(mapper) = RangeMapper::from_config(&RangeConfig {
        min: "0".to_string(),
        max: "1000000000000000000000".to_string(),
        scale_exponent: 30,
    }) else {
        panic!("valid range");
    };
    let step = mapper.step();
    assert_eq!(step, ExactInteger::pow10(19));

    let start = ExactInteger::pow10(20);
    let up = mapper.step_up(&start);
    assert_eq!(mapper.value_to_percent_f64(&up), 11.0);
    assert_eq!(mapper.step_down(&up), start);
}

#[test]
fn slider_rejects_degenerate_config() {
    let cfg = RangeConfig {
        min: "7".to_string(),
        max: "7".to_string(),
        scale_exponent: 30,
    };
    assert_eq!(RangeMapper::from_config(&cfg), Err(RatioError::ZeroWidthRange));

    let cfg = RangeConfig {
        min: "8".to_string(),
        max: "7".to_string(),
        scale_exponent: 30,
    };
    assert_eq!(RangeMapper::from_config(&cfg), Err(RatioError::InvalidRange));
}

// ---------------------------------------------------------------------------
// Display and conversion
// ---------------------------------------------------------------------------

#[test]
fn large_bounds_render_in_exponent_form() {
    let reg = registry();
    let weth = currency(&reg, "WETH");
    assert_eq!(format_magnitude(&amount(&weth, "5")), "5000000000000000000");
    assert_eq!(format_magnitude(&amount(&weth, "50")), "5.00e+19");
}

#[test]
fn weth_to_usdc_conversion() {
    let reg = registry();
    let weth = currency(&reg, "WETH");
    let usdc = currency(&reg, "USDC");

    let Ok(rate) = ExchangeRate::from_decimal_str("2451.37", weth.decimals(), usdc.decimals()) else {
        panic!("valid rate");
    };
    let one_third = amount(&weth, "0.333333333333333333");
    let down = rate.convert(&one_third, Rounding::Down);
    let up = rate.convert(&one_third, Rounding::Up);
    assert_eq!(usdc.format_amount(&down), "817.123333");
    assert_eq!(usdc.format_amount(&up), "817.123334");

    let Ok(back) = rate.inverse() else {
        panic!("non-zero rate");
    };
    let usdc_amount = amount(&usdc, "2451.37");
    assert_eq!(
        weth.format_amount(&back.convert(&usdc_amount, Rounding::Down)),
        "1"
    );
}

#[test]
fn same_symbol_resolves_per_chain() {
    let reg = registry();
    let Ok(op) = reg.currency(10, "usdc") else {
        panic!("registered");
    };
    let sepolia = currency(&reg, "USDC");
    assert_ne!(op.address(), sepolia.address());
    assert_eq!(
        reg.symbol_for_address(10, &op.address()),
        Some("USDC")
    );
}
