use casper_types::U256;

/// Number of samples in a plotted curve.
pub const CURVE_SAMPLES: usize = 1000;

/// 18-decimal fixed-point scale used for all on-chain amounts.
const TOKEN_DECIMALS: u128 = 1_000_000_000_000_000_000;

/// Chart prices are shown in a gwei-like unit, native price times 10^9.
const GWEI_SCALE: f64 = 1_000_000_000.0;

/// Market-cap figures scale the reserve ratio by 10^7 before the USD quote.
const MARKET_CAP_SCALE: f64 = 10_000_000.0;

/// Virtual reserves of a single pool, raw 18-decimal contract values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    pub virtual_base_reserve: U256,
    pub virtual_quote_reserve: U256,
    pub max_listing_base_amount: U256,
}

/// Listing-threshold parameters, raw 18-decimal contract values.
///
/// `initial_virtual_quote_reserve` comes from the shared pool configuration,
/// the cap and fee from the pool itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub initial_virtual_quote_reserve: U256,
    pub max_listing_quote_amount: U256,
    pub listing_fee: U256,
}

/// One sample of the price-vs-supply curve.
///
/// `supply` is in whole tokens, `price` in the gwei-like display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub supply: f64,
    pub price: f64,
}

/// Sample the bonding curve for the detail-page chart.
///
/// The curve approximates a constant-product pool: at a given circulating
/// supply `s`, price is `quote_reserve / (base_reserve + s)`. The supply
/// range `[1, max_supply]` is split into `CURVE_SAMPLES` equal steps; the
/// first sample sits at one whole token, keeping the origin's near-zero
/// denominator out of the grid.
///
/// # Arguments
/// * `reserves` - Raw virtual reserves and listing cap of the pool
///
/// # Returns
/// Exactly `CURVE_SAMPLES` points with strictly increasing supply, or an
/// empty vector when the listing cap is zero. Prices fall monotonically for
/// any positive quote reserve. Pathological inputs are not validated; the
/// result carries whatever IEEE-754 division yields.
pub fn sample_curve(reserves: &PoolReserves) -> Vec<CurvePoint> {
    let base = to_tokens(reserves.virtual_base_reserve);
    let quote = to_tokens(reserves.virtual_quote_reserve);
    let max_supply = to_tokens(reserves.max_listing_base_amount);

    if max_supply <= 0.0 {
        return Vec::new();
    }

    let step = max_supply / CURVE_SAMPLES as f64;
    let mut points = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let supply = 1.0 + i as f64 * step;
        let adjusted_base_reserve = base + supply;
        let price = quote / adjusted_base_reserve * GWEI_SCALE;
        points.push(CurvePoint { supply, price });
    }
    points
}

/// Listing progress as rendered by the progress bars.
///
/// Computes `trunc((quote - initial_quote) / (listing_cap + fee))` and
/// raises it to the 100th power. The exponent matches the deployed board's
/// width formula exactly, including its output range: a quotient of 1 shows
/// 1%, a quotient of 2 shows 2^100 %. The value is not clamped.
///
/// # Arguments
/// * `virtual_quote_reserve` - Raw quote reserve of the pool
/// * `config` - Listing threshold the pool graduates at
///
/// # Returns
/// The percentage, or a non-finite value when the threshold is zero
/// (`+inf` above the initial reserve, `NaN` at it). Callers guard the
/// denominator first if they need a clean error.
pub fn progress_percent(virtual_quote_reserve: U256, config: &ListingConfig) -> f64 {
    let gained = to_f64(virtual_quote_reserve) - to_f64(config.initial_virtual_quote_reserve);
    let threshold = to_f64(config.max_listing_quote_amount) + to_f64(config.listing_fee);
    let raw = (gained / threshold).trunc();
    raw.powi(100)
}

/// USD market-cap figure from a quote/base amount pair.
///
/// Both amounts share the 18-decimal scale, so the ratio is scale-free:
/// `quote / base * 10^7 * native_price_usd`. A zero base amount yields a
/// non-finite figure, surfaced as-is.
pub fn market_cap_usd(quote_amount: U256, base_amount: U256, native_price_usd: f64) -> f64 {
    to_f64(quote_amount) / to_f64(base_amount) * MARKET_CAP_SCALE * native_price_usd
}

/// Converts a raw amount to `f64` without collapsing the low digits.
///
/// Splits at the fixed-point scale first; the remainder is exact in `f64`,
/// so small test-sized values survive untouched. Whole parts beyond
/// `u128::MAX` tokens saturate.
fn to_f64(value: U256) -> f64 {
    let scale = U256::from(TOKEN_DECIMALS);
    let whole = value / scale;
    if whole.bits() > 128 {
        return u128::MAX as f64 * TOKEN_DECIMALS as f64;
    }
    whole.as_u128() as f64 * TOKEN_DECIMALS as f64 + (value % scale).as_u128() as f64
}

/// Raw 18-decimal amount in whole tokens.
fn to_tokens(value: U256) -> f64 {
    to_f64(value) / TOKEN_DECIMALS as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: u64) -> U256 {
        U256::from(n) * U256::from(TOKEN_DECIMALS)
    }

    fn reserves(base: u64, quote: u64, cap: u64) -> PoolReserves {
        PoolReserves {
            virtual_base_reserve: tokens(base),
            virtual_quote_reserve: tokens(quote),
            max_listing_base_amount: tokens(cap),
        }
    }

    fn listing(initial: u64, cap: u64, fee: u64) -> ListingConfig {
        ListingConfig {
            initial_virtual_quote_reserve: U256::from(initial),
            max_listing_quote_amount: U256::from(cap),
            listing_fee: U256::from(fee),
        }
    }

    #[test]
    fn test_sample_count_and_grid() {
        let points = sample_curve(&reserves(5_000, 2_000, 1_000_000));

        assert_eq!(points.len(), CURVE_SAMPLES);
        assert_eq!(points[0].supply, 1.0);
        for pair in points.windows(2) {
            assert!(pair[1].supply > pair[0].supply);
        }

        // Last sample lands within one step of the cap.
        let step = 1_000_000.0 / CURVE_SAMPLES as f64;
        let last = points[CURVE_SAMPLES - 1].supply;
        assert!((1_000_000.0 - last).abs() < step);
    }

    #[test]
    fn test_price_decreases_along_curve() {
        let points = sample_curve(&reserves(100, 1_000, 50_000));

        for pair in points.windows(2) {
            assert!(pair[1].price < pair[0].price);
        }
        assert!(points.iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_zero_cap_yields_empty_curve() {
        let degenerate = PoolReserves {
            virtual_base_reserve: tokens(100),
            virtual_quote_reserve: tokens(1_000),
            max_listing_base_amount: U256::zero(),
        };
        assert!(sample_curve(&degenerate).is_empty());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let r = reserves(123, 456, 789_000);
        assert_eq!(sample_curve(&r), sample_curve(&r));
    }

    #[test]
    fn test_known_pool_prices() {
        // base 100, quote 1000, cap 10: first sample at supply 1 prices at
        // 1000 / 101 in native units, about 9.9 gwei-scaled billions.
        let points = sample_curve(&reserves(100, 1_000, 10));

        let first = points[0];
        assert_eq!(first.supply, 1.0);
        assert!((first.price - 9_900_990_099.0).abs() < 1.0);

        let last = points[CURVE_SAMPLES - 1];
        assert!((last.supply - 10.99).abs() < 1e-9);
        assert!(last.price > 9_000_000_000.0 && last.price < 9_100_000_000.0);
    }

    #[test]
    fn test_progress_quotient_of_one() {
        // (1500 - 1000) / (400 + 100) = 1, and 1^100 = 1.
        let percent = progress_percent(U256::from(1_500u64), &listing(1_000, 400, 100));
        assert_eq!(percent, 1.0);
    }

    #[test]
    fn test_progress_exponent_blowup() {
        // (3000 - 1000) / (900 + 100) = 2; the width formula raises the
        // quotient to the 100th power, so the bar gets 2^100 percent.
        let percent = progress_percent(U256::from(3_000u64), &listing(1_000, 900, 100));
        assert_eq!(percent, 2f64.powi(100));
    }

    #[test]
    fn test_progress_truncates_partial_quotients() {
        // 250 / 500 truncates to 0 before the exponent.
        let percent = progress_percent(U256::from(1_250u64), &listing(1_000, 400, 100));
        assert_eq!(percent, 0.0);

        // A reserve below the initial one truncates to -0 and stays 0.
        let percent = progress_percent(U256::from(900u64), &listing(1_000, 400, 100));
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn test_progress_zero_threshold_is_non_finite() {
        let cfg = listing(1_000, 0, 0);

        // Positive numerator over zero divides to +inf.
        let percent = progress_percent(U256::from(1_500u64), &cfg);
        assert!(percent.is_infinite() && percent.is_sign_positive());

        // Zero over zero is NaN.
        assert!(progress_percent(U256::from(1_000u64), &cfg).is_nan());
    }

    #[test]
    fn test_market_cap_ratio_is_scale_free() {
        let from_raw = market_cap_usd(U256::from(1_500u64), U256::from(3_000u64), 2.0);
        let from_scaled = market_cap_usd(tokens(1_500), tokens(3_000), 2.0);

        assert_eq!(from_raw, 10_000_000.0);
        assert_eq!(from_raw, from_scaled);
    }

    #[test]
    fn test_market_cap_zero_base_is_non_finite() {
        let cap = market_cap_usd(tokens(1_500), U256::zero(), 1.0);
        assert!(!cap.is_finite());
    }

    #[test]
    fn test_to_f64_keeps_low_digits() {
        assert_eq!(to_f64(U256::from(1_500u64)), 1_500.0);
        assert_eq!(to_tokens(tokens(100)), 100.0);

        // Half a token survives the conversion.
        let half = U256::from(TOKEN_DECIMALS / 2);
        assert_eq!(to_tokens(tokens(1) + half), 1.5);
    }
}
