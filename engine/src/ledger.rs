//! Per-account ledger entries.

use serde::{Deserialize, Serialize};
use streampool_types::INDEX_SCALE;

use crate::error::EngineError;

/// One participant's slice of the pool: staked weight, reward already
/// settled but not paid out, and the index value of the last settlement.
///
/// Lifecycle: created on first deposit; weight rises on deposit and drops
/// to zero on withdraw; stored reward drains to zero on payout. The entry
/// persists while dormant, so a dormant entry with nothing stored is
/// indistinguishable from one that never existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeEntry {
    /// The participant's contribution to the pool's total weight.
    pub weight: u128,

    /// Reward settled but not yet paid out.
    pub stored_reward: u128,

    /// `reward_index` at this entry's last settlement.
    pub checkpoint: u128,
}

impl StakeEntry {
    /// A fresh entry checkpointed at the current index. It earns nothing
    /// for any interval before its creation.
    pub fn new(checkpoint: u128) -> Self {
        Self {
            weight: 0,
            stored_reward: 0,
            checkpoint,
        }
    }

    /// Settle this entry against an advanced index: credit
    /// `weight * (index - checkpoint) / INDEX_SCALE` (truncating) and move
    /// the checkpoint.
    ///
    /// Must run before any weight change — settling after would erase or
    /// fabricate reward for the elapsed interval. Idempotent at a fixed
    /// index.
    pub fn settle(&mut self, reward_index: u128) -> Result<(), EngineError> {
        self.stored_reward = self
            .stored_reward
            .checked_add(self.earned_at(reward_index)?)
            .ok_or(EngineError::Overflow)?;
        self.checkpoint = reward_index;
        Ok(())
    }

    /// Reward earned since the last settlement, as of `reward_index`.
    ///
    /// The index never decreases; a `reward_index` below the checkpoint
    /// indicates corrupted state and surfaces as `Overflow`.
    pub fn earned_at(&self, reward_index: u128) -> Result<u128, EngineError> {
        let delta = reward_index
            .checked_sub(self.checkpoint)
            .ok_or(EngineError::Overflow)?;
        Ok(self
            .weight
            .checked_mul(delta)
            .ok_or(EngineError::Overflow)?
            / INDEX_SCALE)
    }

    /// Settled plus not-yet-settled reward at `reward_index` — the
    /// claimable projection used by read-only queries.
    pub fn projected_reward(&self, reward_index: u128) -> Result<u128, EngineError> {
        self.stored_reward
            .checked_add(self.earned_at(reward_index)?)
            .ok_or(EngineError::Overflow)
    }

    pub fn is_active(&self) -> bool {
        self.weight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_credits_and_moves_checkpoint() {
        let mut entry = StakeEntry::new(0);
        entry.weight = 1000;
        entry.settle(10_000_000_000).unwrap();
        assert_eq!(entry.stored_reward, 10);
        assert_eq!(entry.checkpoint, 10_000_000_000);
    }

    #[test]
    fn settle_twice_at_same_index_adds_nothing() {
        let mut entry = StakeEntry::new(0);
        entry.weight = 1000;
        entry.settle(10_000_000_000).unwrap();
        entry.settle(10_000_000_000).unwrap();
        assert_eq!(entry.stored_reward, 10);
    }

    #[test]
    fn earned_truncates_toward_zero() {
        let mut entry = StakeEntry::new(0);
        entry.weight = 1000;
        // 1000 * 3_333_333_333 / 1e12 = 3.333..., truncated
        assert_eq!(entry.earned_at(3_333_333_333).unwrap(), 3);
        entry.settle(3_333_333_333).unwrap();
        assert_eq!(entry.stored_reward, 3);
    }

    #[test]
    fn fresh_entry_earns_nothing_at_its_own_checkpoint() {
        let entry = StakeEntry::new(5_000_000_000_000);
        assert_eq!(entry.earned_at(5_000_000_000_000).unwrap(), 0);
        assert_eq!(entry.projected_reward(5_000_000_000_000).unwrap(), 0);
    }

    #[test]
    fn projected_includes_stored_and_unsettled() {
        let mut entry = StakeEntry::new(0);
        entry.weight = 500;
        entry.stored_reward = 7;
        // 500 * 2e12 / 1e12 = 1000
        assert_eq!(entry.projected_reward(2_000_000_000_000).unwrap(), 1007);
    }

    #[test]
    fn index_below_checkpoint_is_corruption() {
        let mut entry = StakeEntry::new(100);
        entry.weight = 1;
        assert!(matches!(entry.earned_at(99), Err(EngineError::Overflow)));
    }
}
