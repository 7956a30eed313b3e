//! Funding progress and range slider walkthrough.
//!
//! Loads a currency registry, parses human-readable amounts for an
//! 18-decimal token, reports funding progress, and drives a range slider
//! whose bounds are far beyond `f64` integer precision.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hypercert_ratio=debug cargo run --example funding_progress --features logging
//! ```

use hypercert_ratio::config::{RangeConfig, RawTokenConfig, TokenConfig};
use hypercert_ratio::domain::{FundingProgress, Rounding};
use hypercert_ratio::logging::init_tracing;
use hypercert_ratio::math::{format_magnitude, ExchangeRate, RangeMapper};
use hypercert_ratio::registry::CurrencyRegistry;
use hypercert_ratio::traits::FromConfig;

const REGISTRY: &str = r#"
[[chains]]
id = 11155111
name = "Sepolia"
native_symbol = "ETH"
testnet = true

[[currencies]]
chain_id = 11155111
symbol = "WETH"
address = "0x7b79995e5f793a07bc00c21412e50ecae098e7f9"
decimals = 18

[[currencies]]
chain_id = 11155111
symbol = "USDC"
address = "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238"
decimals = 6
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(false)?;
    println!("=== Hypercert funding progress ===\n");

    // ── 1. Resolve currencies ───────────────────────────────────────────
    let registry = CurrencyRegistry::from_toml_str(REGISTRY)?;
    let weth = registry.normalize(&TokenConfig::Raw(RawTokenConfig {
        symbol: "weth".into(),
        chain_id: 11_155_111,
    }))?;
    let usdc = registry.currency(11_155_111, "USDC")?.clone();
    println!("{}: {} decimals at {}", weth.symbol(), weth.decimals().get(), weth.address());
    println!("{}: {} decimals at {}", usdc.symbol(), usdc.decimals().get(), usdc.address());

    // ── 2. Funding progress ─────────────────────────────────────────────
    let raised = weth.parse_amount("3.1415")?;
    let target = weth.parse_amount("12")?;
    let progress = FundingProgress::new(raised.clone(), Some(target.clone()));

    println!("\nRaised:    {} WETH ({})", weth.format_amount(&raised), format_magnitude(&raised));
    println!("Target:    {} WETH ({})", weth.format_amount(&target), format_magnitude(&target));
    if let Some(p) = progress.percentage() {
        println!("Progress:  {p}%");
    }
    if let Some(left) = progress.remaining() {
        println!("Remaining: {} WETH", weth.format_amount(&left));
    }

    // ── 3. Range slider over token units ────────────────────────────────
    let config = RangeConfig::from_toml_str(
        "min = \"0\"\nmax = \"25000000000000000000000\"\n",
    )?;
    let mapper = RangeMapper::from_config(&config)?;
    println!("\nSlider range: {}", mapper.range());
    println!("  max (display): {}", format_magnitude(mapper.range().max()));
    println!("  step:          {} WETH", weth.format_amount(&mapper.step()));

    let position = mapper.value_to_percent(&raised);
    let back = mapper.percent_to_value(&position);
    println!("  raised at:     {position}");
    println!("  round trip:    {} WETH (exact: {})", weth.format_amount(&back), back == raised);

    let nudged = mapper.step_up(&raised);
    println!("  after step up: {} WETH", weth.format_amount(&nudged));

    // ── 4. Quote in USDC ────────────────────────────────────────────────
    let rate = ExchangeRate::from_decimal_str("2451.37", weth.decimals(), usdc.decimals())?;
    let quoted = rate.convert(&raised, Rounding::Down);
    println!("\nAt {rate} USDC/WETH the raised funds are worth {} USDC", usdc.format_amount(&quoted));

    println!("\n=== Done ===");
    Ok(())
}
