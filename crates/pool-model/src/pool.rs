use casper_types::U256;
use curve_sampler::{sample_curve, CurvePoint, ListingConfig, PoolReserves};

use crate::details::PoolDetails;
use crate::error::ModelError;

/// Owner of a pool created before any wallet is connected.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// ============ Raw contract-read views ============

/// `getPoolInfo` result as delivered by the contract-read layer, every
/// numeric field still a decimal string.
#[derive(Debug, Clone, Copy)]
pub struct RawPoolInfo<'a> {
    pub token: &'a str,
    pub owner: &'a str,
    pub router: &'a str,
    pub virtual_base_reserve: &'a str,
    pub virtual_quote_reserve: &'a str,
    pub max_listing_base_amount: &'a str,
    pub max_listing_quote_amount: &'a str,
    pub listing_fee: &'a str,
    pub start_time: &'a str,
    pub pool_details: &'a str,
}

/// `getPoolConfig` result, the curve configuration shared by every pool
/// created at the same config index.
#[derive(Debug, Clone, Copy)]
pub struct RawPoolConfig<'a> {
    pub initial_virtual_base_reserve: &'a str,
    pub initial_virtual_quote_reserve: &'a str,
    pub max_listing_base_amount: &'a str,
    pub max_listing_quote_amount: &'a str,
    pub listing_fee: &'a str,
}

fn parse_amount(field: &'static str, value: &str) -> Result<U256, ModelError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ModelError::InvalidNumber { field });
    }
    U256::from_dec_str(value).map_err(|_| ModelError::InvalidNumber { field })
}

fn parse_seconds(field: &'static str, value: &str) -> Result<u64, ModelError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ModelError::InvalidNumber { field })
}

// ============ Typed records ============

/// One launched pool, decoded once at the boundary.
#[derive(Debug, Clone)]
pub struct PoolInfo {
    pub token: String,
    pub owner: String,
    pub router: String,
    pub virtual_base_reserve: U256,
    pub virtual_quote_reserve: U256,
    pub max_listing_base_amount: U256,
    pub max_listing_quote_amount: U256,
    pub listing_fee: U256,
    /// Launch time, unix seconds.
    pub start_time: u64,
    /// Metadata JSON exactly as stored on-chain; see [`PoolDetails`].
    pub pool_details: String,
}

/// Shared curve configuration for a config index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub initial_virtual_base_reserve: U256,
    pub initial_virtual_quote_reserve: U256,
    pub max_listing_base_amount: U256,
    pub max_listing_quote_amount: U256,
    pub listing_fee: U256,
}

impl PoolInfo {
    /// Decode a raw `getPoolInfo` tuple, naming the offending field on a
    /// malformed number.
    pub fn from_raw(raw: &RawPoolInfo<'_>) -> Result<Self, ModelError> {
        Ok(PoolInfo {
            token: raw.token.to_string(),
            owner: raw.owner.to_string(),
            router: raw.router.to_string(),
            virtual_base_reserve: parse_amount("virtualBaseReserve", raw.virtual_base_reserve)?,
            virtual_quote_reserve: parse_amount("virtualQuoteReserve", raw.virtual_quote_reserve)?,
            max_listing_base_amount: parse_amount(
                "maxListingBaseAmount",
                raw.max_listing_base_amount,
            )?,
            max_listing_quote_amount: parse_amount(
                "maxListingQuoteAmount",
                raw.max_listing_quote_amount,
            )?,
            listing_fee: parse_amount("listingFee", raw.listing_fee)?,
            start_time: parse_seconds("startTime", raw.start_time)?,
            pool_details: raw.pool_details.to_string(),
        })
    }

    /// Sampler input for this pool.
    pub fn reserves(&self) -> PoolReserves {
        PoolReserves {
            virtual_base_reserve: self.virtual_base_reserve,
            virtual_quote_reserve: self.virtual_quote_reserve,
            max_listing_base_amount: self.max_listing_base_amount,
        }
    }

    /// Price-vs-supply grid for the detail-page chart.
    pub fn sample_curve(&self) -> Vec<CurvePoint> {
        sample_curve(&self.reserves())
    }

    /// Listing threshold the views measure progress against: the initial
    /// quote reserve comes from the shared config, the cap and fee from the
    /// pool itself.
    pub fn listing_config(&self, config: &PoolConfig) -> ListingConfig {
        ListingConfig {
            initial_virtual_quote_reserve: config.initial_virtual_quote_reserve,
            max_listing_quote_amount: self.max_listing_quote_amount,
            listing_fee: self.listing_fee,
        }
    }

    /// Progress-bar percentage. Unclamped; see
    /// [`curve_sampler::progress_percent`].
    pub fn progress_percent(&self, config: &PoolConfig) -> f64 {
        curve_sampler::progress_percent(self.virtual_quote_reserve, &self.listing_config(config))
    }

    /// Current market cap, quote reserve against base reserve.
    pub fn market_cap_usd(&self, native_price_usd: f64) -> f64 {
        curve_sampler::market_cap_usd(
            self.virtual_quote_reserve,
            self.virtual_base_reserve,
            native_price_usd,
        )
    }

    /// Card figure: quote reserve against the listing cap of the base token.
    pub fn diluted_market_cap_usd(&self, native_price_usd: f64) -> f64 {
        curve_sampler::market_cap_usd(
            self.virtual_quote_reserve,
            self.max_listing_base_amount,
            native_price_usd,
        )
    }

    /// Board ownership filter. A disconnected wallet compares against the
    /// zero address, so it matches only pools actually owned by it.
    pub fn is_owned_by(&self, address: Option<&str>) -> bool {
        self.owner == address.unwrap_or(ZERO_ADDRESS)
    }

    /// Strict metadata decode. An empty payload is a valid default record.
    pub fn details(&self) -> Result<PoolDetails, ModelError> {
        if self.pool_details.is_empty() {
            return Ok(PoolDetails::default());
        }
        PoolDetails::parse(&self.pool_details)
    }

    /// Board-listing decode: a malformed payload is logged and rendered as
    /// an empty card rather than failing the whole board.
    pub fn details_lossy(&self) -> PoolDetails {
        match self.details() {
            Ok(details) => details,
            Err(err) => {
                log::warn!("pool {} has malformed details: {err}", self.token);
                PoolDetails::default()
            }
        }
    }
}

impl PoolConfig {
    /// Decode a raw `getPoolConfig` tuple.
    pub fn from_raw(raw: &RawPoolConfig<'_>) -> Result<Self, ModelError> {
        Ok(PoolConfig {
            initial_virtual_base_reserve: parse_amount(
                "initialVirtualBaseReserve",
                raw.initial_virtual_base_reserve,
            )?,
            initial_virtual_quote_reserve: parse_amount(
                "initialVirtualQuoteReserve",
                raw.initial_virtual_quote_reserve,
            )?,
            max_listing_base_amount: parse_amount(
                "maxListingBaseAmount",
                raw.max_listing_base_amount,
            )?,
            max_listing_quote_amount: parse_amount(
                "maxListingQuoteAmount",
                raw.max_listing_quote_amount,
            )?,
            listing_fee: parse_amount("listingFee", raw.listing_fee)?,
        })
    }

    /// Graduation target shown on the detail page: the market cap at which
    /// liquidity moves to the DEX.
    pub fn listing_market_cap_usd(&self, native_price_usd: f64) -> f64 {
        curve_sampler::market_cap_usd(
            self.max_listing_quote_amount,
            self.max_listing_base_amount,
            native_price_usd,
        )
    }
}
