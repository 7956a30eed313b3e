//! Property-based tests using `proptest` for the arithmetic invariants.
//!
//! 1. **Round-trip**: `percent_to_value(value_to_percent(v)) == v` for
//!    in-range values when `diff ≤ 100 · SCALE`.
//! 2. **Monotonicity**: both range conversions are non-decreasing.
//! 3. **Boundaries**: `min ↦ 0 %`, `max ↦ 100 %`, and back.
//! 4. **Operand equivalence**: text and integer operands agree.
//! 5. **Percentage bound**: `0 ≤ n ≤ d ⇒ 0 ≤ percentage ≤ 100`.
//! 6. **Unit canonical form**: `parse_units(format_units(x)) == x`.
//! 7. **Conversion rounding**: `Up - Down ∈ {0, 1}`.
//! 8. **Float round-trip**: the `f64` pair recovers every value, above and
//!    below `min`, for ranges up to 10^12 wide.
//! 9. **Float monotonicity**: both `f64` conversions are non-decreasing.

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use super::{format_units, parse_units, percentage_exact, ExchangeRate, RangeMapper};
use crate::domain::{Decimals, ExactInteger, Percent, RangeSpec, Rounding};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn int(v: i128) -> ExactInteger {
    ExactInteger::from(v)
}

fn make_mapper(min: i128, width: i128) -> RangeMapper {
    let Ok(range) = RangeSpec::new(int(min), int(min + width)) else {
        panic!("ordered range");
    };
    let Ok(mapper) = RangeMapper::new(range) else {
        panic!("non-empty range");
    };
    mapper
}

/// Mapper whose bounds sit at 10^27 scale, typical of 18-decimal tokens.
fn make_wei_mapper(min_units: u64, width_units: u64) -> RangeMapper {
    let unit = ExactInteger::pow10(18);
    let min = &ExactInteger::from(min_units) * &unit;
    let max = &min + &(&ExactInteger::from(width_units) * &unit);
    let Ok(range) = RangeSpec::new(min, max) else {
        panic!("ordered range");
    };
    let Ok(mapper) = RangeMapper::new(range) else {
        panic!("non-empty range");
    };
    mapper
}

fn decimals(v: u8) -> Decimals {
    let Ok(d) = Decimals::new(v) else {
        panic!("valid decimals");
    };
    d
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Range lower bounds, including negative ones.
fn min_strategy() -> impl Strategy<Value = i128> {
    -1_000_000_000_000i128..=1_000_000_000_000i128
}

/// Range widths, from a single unit up to 10^24.
fn width_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1i128..=1_000i128,
        1_000i128..=1_000_000_000i128,
        1_000_000_000i128..=1_000_000_000_000_000_000_000_000i128,
    ]
}

/// Range widths for the `f64` interface, up to 10^12.
fn f64_width_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1i128..=1_000i128,
        1_000i128..=1_000_000_000_000i128,
    ]
}

/// Offsets as a fraction of the width, in millionths.
fn fraction_strategy() -> impl Strategy<Value = i128> {
    0i128..=1_000_000i128
}

fn decimals_strategy() -> impl Strategy<Value = u8> {
    0u8..=18u8
}

/// Rates expressed as `numer / denom` with small positive parts.
fn rate_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1u64..=1_000_000_000u64, 1u64..=1_000_000_000u64)
}

// ---------------------------------------------------------------------------
// Properties 1-3: Range mapping
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_exact(
        min in min_strategy(),
        width in width_strategy(),
        frac in fraction_strategy(),
    ) {
        let mapper = make_mapper(min, width);
        let value = int(min + width / 1_000_000 * frac + (width % 1_000_000) * frac / 1_000_000);
        prop_assume!(mapper.range().contains(&value));

        let percent = mapper.value_to_percent(&value);
        let back = mapper.percent_to_value(&percent);
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_round_trip_wei_scale(
        min_units in 0u64..=1_000_000u64,
        width_units in 1u64..=1_000_000_000u64,
        offset in any::<u64>(),
    ) {
        let mapper = make_wei_mapper(min_units, width_units);
        let Some(offset) = crate::math::div_round(
            &(&ExactInteger::from(offset) * mapper.diff()),
            &ExactInteger::from(u64::MAX),
            Rounding::Down,
        ) else {
            return Ok(());
        };
        let value = mapper.range().min() + &offset;

        let percent = mapper.value_to_percent(&value);
        prop_assert_eq!(mapper.percent_to_value(&percent), value);
    }

    #[test]
    fn prop_value_to_percent_monotone(
        min in min_strategy(),
        width in width_strategy(),
        a in fraction_strategy(),
        b in fraction_strategy(),
    ) {
        let mapper = make_mapper(min, width);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = int(min + width / 1_000_000 * lo);
        let v_hi = int(min + width / 1_000_000 * hi);

        prop_assert!(mapper.value_to_percent(&v_lo) <= mapper.value_to_percent(&v_hi));
    }

    #[test]
    fn prop_percent_to_value_monotone(
        min in min_strategy(),
        width in width_strategy(),
        a in 0u32..=10_000u32,
        b in 0u32..=10_000u32,
    ) {
        let mapper = make_mapper(min, width);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = Percent::new(BigRational::new(BigInt::from(lo), BigInt::from(100)));
        let p_hi = Percent::new(BigRational::new(BigInt::from(hi), BigInt::from(100)));

        prop_assert!(mapper.percent_to_value(&p_lo) <= mapper.percent_to_value(&p_hi));
    }

    #[test]
    fn prop_boundaries(
        min in min_strategy(),
        width in width_strategy(),
    ) {
        let mapper = make_mapper(min, width);
        let lo = mapper.range().min().clone();
        let hi = mapper.range().max().clone();

        prop_assert_eq!(mapper.value_to_percent(&lo), Percent::zero());
        prop_assert_eq!(mapper.value_to_percent(&hi), Percent::hundred());
        prop_assert_eq!(mapper.percent_to_value(&Percent::zero()), lo);
        prop_assert_eq!(mapper.percent_to_value(&Percent::hundred()), hi);
    }
}

// ---------------------------------------------------------------------------
// Properties 4-5: Percentage
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_text_and_integer_operands_agree(
        n in any::<i64>(),
        d in any::<i64>(),
    ) {
        let from_ints = percentage_exact(Some(n), Some(d));
        let from_text = percentage_exact(Some(n.to_string()), Some(d.to_string()));
        prop_assert_eq!(from_ints, from_text);
    }

    #[test]
    fn prop_percentage_bounded_for_partial_funding(
        d in 1u128..=u128::MAX,
        frac in fraction_strategy(),
    ) {
        let n = d / 1_000_000 * frac.unsigned_abs();
        let Ok(Some(p)) = percentage_exact(Some(n), Some(d)) else {
            panic!("defined for non-zero denominator");
        };
        prop_assert!(p >= ExactInteger::zero());
        prop_assert!(p <= ExactInteger::from(100));
    }
}

// ---------------------------------------------------------------------------
// Properties 6-7: Units and conversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_units_canonical_form(
        raw in any::<i128>(),
        d in decimals_strategy(),
    ) {
        let d = decimals(d);
        let minor = int(raw);
        let text = format_units(&minor, d);
        prop_assert_eq!(parse_units(&text, d), Ok(minor));
    }

    #[test]
    fn prop_convert_rounding_gap(
        amount in any::<u64>(),
        (numer, denom) in rate_strategy(),
        bd in decimals_strategy(),
        qd in decimals_strategy(),
    ) {
        let rate = BigRational::new(BigInt::from(numer), BigInt::from(denom));
        let Ok(rate) = ExchangeRate::new(rate, decimals(bd), decimals(qd)) else {
            panic!("positive rate");
        };
        let amount = ExactInteger::from(amount);
        let up = rate.convert(&amount, Rounding::Up);
        let down = rate.convert(&amount, Rounding::Down);
        let gap = &up - &down;

        prop_assert!(gap == ExactInteger::zero() || gap == ExactInteger::from(1));
    }
}

// ---------------------------------------------------------------------------
// Properties 8-9: Float interface
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_f64_round_trip(
        min in min_strategy(),
        width in f64_width_strategy(),
        frac in -1_000_000i128..=2_000_000i128,
    ) {
        let mapper = make_mapper(min, width);
        let offset = width / 1_000_000 * frac + (width % 1_000_000) * frac / 1_000_000;
        let value = int(min + offset);

        let p = mapper.value_to_percent_f64(&value);
        let Ok(back) = mapper.percent_to_value_f64(p) else {
            panic!("finite percent");
        };
        prop_assert_eq!(back, value, "p = {}", p);
    }

    #[test]
    fn prop_f64_round_trip_small_widths(
        min in min_strategy(),
        width in 1i128..=500i128,
        offset in -500i128..=1_000i128,
    ) {
        let mapper = make_mapper(min, width);
        let value = int(min + offset);

        let p = mapper.value_to_percent_f64(&value);
        let Ok(back) = mapper.percent_to_value_f64(p) else {
            panic!("finite percent");
        };
        prop_assert_eq!(back, value, "p = {}", p);
    }

    #[test]
    fn prop_value_to_percent_f64_monotone(
        min in min_strategy(),
        width in f64_width_strategy(),
        a in -1_000_000i128..=2_000_000i128,
        b in -1_000_000i128..=2_000_000i128,
    ) {
        let mapper = make_mapper(min, width);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = int(min + width / 1_000_000 * lo);
        let v_hi = int(min + width / 1_000_000 * hi);

        prop_assert!(mapper.value_to_percent_f64(&v_lo) <= mapper.value_to_percent_f64(&v_hi));
    }

    #[test]
    fn prop_percent_to_value_f64_monotone(
        min in min_strategy(),
        width in width_strategy(),
        a in -200.0f64..=300.0f64,
        b in -200.0f64..=300.0f64,
    ) {
        let mapper = make_mapper(min, width);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (Ok(v_lo), Ok(v_hi)) = (mapper.percent_to_value_f64(lo), mapper.percent_to_value_f64(hi)) else {
            panic!("finite percent");
        };

        prop_assert!(v_lo <= v_hi);
    }
}
