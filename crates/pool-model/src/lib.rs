//! Read-side model for the token launch board.
//!
//! The contract-read layer hands this crate the raw `getPoolInfo` and
//! `getPoolConfig` tuples (decimal strings and a metadata JSON payload);
//! everything is decoded into typed records once, here at the boundary, and
//! the view-level derivations (curve samples, progress, market caps, router
//! names) are exposed as methods over those records. Nothing is cached or
//! persisted; records are rebuilt on every refresh.

pub mod details;
pub mod error;
pub mod pool;
pub mod registry;

pub use details::PoolDetails;
pub use error::ModelError;
pub use pool::{PoolConfig, PoolInfo, RawPoolConfig, RawPoolInfo, ZERO_ADDRESS};
pub use registry::{chain, short_address, Chain, Router, CHAINS, TAGS};
