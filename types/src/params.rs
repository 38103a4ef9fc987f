//! Pool construction parameters and fixed-point scaling.

use serde::{Deserialize, Serialize};

/// Fixed-point scale applied to the cumulative reward index.
///
/// One index unit represents `1 / INDEX_SCALE` reward units per unit of
/// weight. At 1e12 the per-settlement truncation loss stays below one
/// reward unit for any total weight up to the scale itself, while
/// `weight * index_delta` keeps ample headroom in `u128`.
pub const INDEX_SCALE: u128 = 1_000_000_000_000;

/// Construction-time parameters of a pool.
///
/// The emission rate is fixed for the pool's lifetime; there is no
/// governance path to change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParams {
    /// Reward units emitted per second, split across all active weight.
    pub emission_rate: u128,
}

impl PoolParams {
    pub fn new(emission_rate: u128) -> Self {
        Self { emission_rate }
    }
}
