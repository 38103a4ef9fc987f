//! Global reward accumulator — the lazy O(1) index at the heart of the pool.

use serde::{Deserialize, Serialize};
use streampool_types::{Timestamp, INDEX_SCALE};

use crate::error::EngineError;

/// Pool-wide accrual state: total active weight, the cumulative
/// reward-per-weight index, and the time of the last advance.
///
/// The index is monotonically non-decreasing and moves only while
/// `total_weight > 0`. While the pool is empty it is frozen — nothing is
/// emitted to nobody — but `last_update` still tracks `now`, so time spent
/// empty is never charged retroactively once participants return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardAccumulator {
    /// Sum of all active participants' weight.
    pub total_weight: u128,

    /// Cumulative reward per unit of weight since pool inception,
    /// fixed-point scaled by [`INDEX_SCALE`].
    pub reward_index: u128,

    /// When the index was last advanced.
    pub last_update: Timestamp,

    /// Reward units emitted per second, fixed at construction.
    pub rate: u128,
}

impl RewardAccumulator {
    pub fn new(rate: u128, genesis: Timestamp) -> Self {
        Self {
            total_weight: 0,
            reward_index: 0,
            last_update: genesis,
            rate,
        }
    }

    /// Advance the index to `now`.
    ///
    /// While weight is staked the index grows by
    /// `rate * elapsed * INDEX_SCALE / total_weight`, truncating toward
    /// zero. `last_update` moves to `now` whether or not anything accrued.
    /// A `now` at or before `last_update` is a no-op.
    pub fn advance(&mut self, now: Timestamp) -> Result<(), EngineError> {
        self.reward_index = self.index_at(now)?;
        if now > self.last_update {
            self.last_update = now;
        }
        Ok(())
    }

    /// The index value as of `now`, without mutating anything.
    ///
    /// Read-only queries settle against this projection.
    pub fn index_at(&self, now: Timestamp) -> Result<u128, EngineError> {
        let elapsed = now.seconds_since(self.last_update);
        if self.total_weight == 0 || elapsed == 0 {
            return Ok(self.reward_index);
        }
        let emitted = self
            .rate
            .checked_mul(elapsed as u128)
            .ok_or(EngineError::Overflow)?;
        let scaled = emitted
            .checked_mul(INDEX_SCALE)
            .ok_or(EngineError::Overflow)?;
        self.reward_index
            .checked_add(scaled / self.total_weight)
            .ok_or(EngineError::Overflow)
    }

    /// Raw reward emission since the last advance: `rate * (now - last_update)`.
    ///
    /// A diagnostic figure, independent of how it splits across accounts —
    /// not a claimable amount.
    pub fn pending_emission(&self, now: Timestamp) -> Result<u128, EngineError> {
        self.rate
            .checked_mul(now.seconds_since(self.last_update) as u128)
            .ok_or(EngineError::Overflow)
    }
}
