//! Pure bonding-curve math for the launch board views.
//!
//! Everything in this crate is a stateless function over contract-read
//! values: the price-vs-supply grid behind the detail-page chart, the
//! listing progress percentage behind the progress bars, and the market-cap
//! figures shown on the cards. Nothing here performs I/O or keeps state;
//! callers re-run the functions whenever fresh reserves arrive.

pub mod curves;

pub use curves::{
    market_cap_usd, progress_percent, sample_curve, CurvePoint, ListingConfig, PoolReserves,
    CURVE_SAMPLES,
};
