//! The pool engine — operation surface over the accumulator and the
//! per-account ledger.

use std::collections::HashMap;

use streampool_custody::Custody;
use streampool_store::PoolStore;
use streampool_types::{AccountId, PoolParams, Timestamp};

use crate::access;
use crate::accumulator::RewardAccumulator;
use crate::config::PoolConfig;
use crate::error::EngineError;
use crate::event::{EventBus, PoolEvent};
use crate::ledger::StakeEntry;

const META_ACCUMULATOR: &[u8] = b"accumulator";
const META_OWNER: &[u8] = b"owner";

/// Read-only view of one account: active weight plus the reward it could
/// claim right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountStatus {
    pub weight: u128,
    pub projected_reward: u128,
}

/// The stake-accounting engine.
///
/// Operations are totally ordered by the host: mutating calls take
/// `&mut self` and run to completion, read-only queries take `&self` and
/// observe a consistent snapshot by construction. Every mutating call
/// settles the touched account first, then mutates, then requests the
/// custody transfer — and commits all of it only once the transfer is
/// accepted, so a rejection leaves no observable trace.
pub struct PoolEngine {
    /// Pool-wide accrual state.
    pub accumulator: RewardAccumulator,
    /// Ledger entries for every participant ever seen.
    pub accounts: HashMap<AccountId, StakeEntry>,
    owner: AccountId,
    events: EventBus,
}

impl PoolEngine {
    pub fn new(params: PoolParams, owner: AccountId, genesis: Timestamp) -> Self {
        Self {
            accumulator: RewardAccumulator::new(params.emission_rate, genesis),
            accounts: HashMap::new(),
            owner,
            events: EventBus::new(),
        }
    }

    pub fn from_config(config: &PoolConfig, genesis: Timestamp) -> Self {
        Self::new(config.params(), config.owner.clone(), genesis)
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Register a listener for committed-mutation events.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&PoolEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    /// Stage the settlement of `account` at `now`: advance a copy of the
    /// accumulator and reconcile a copy of the entry against it. Nothing
    /// is committed; the caller pairs the staged state with a custody
    /// transfer and commits both or neither.
    fn settle_staged(
        &self,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<(RewardAccumulator, StakeEntry), EngineError> {
        let mut acc = self.accumulator;
        acc.advance(now)?;
        let mut entry = self
            .accounts
            .get(account)
            .copied()
            .unwrap_or_else(|| StakeEntry::new(acc.reward_index));
        entry.settle(acc.reward_index)?;
        Ok((acc, entry))
    }

    fn commit(&mut self, account: &AccountId, acc: RewardAccumulator, entry: StakeEntry) {
        self.accumulator = acc;
        self.accounts.insert(account.clone(), entry);
    }

    fn is_active(&self, account: &AccountId) -> bool {
        self.accounts.get(account).is_some_and(StakeEntry::is_active)
    }

    /// Add `amount` of principal to `account`'s stake.
    pub fn deposit(
        &mut self,
        custody: &dyn Custody,
        account: &AccountId,
        amount: u128,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        let (mut acc, mut entry) = self.settle_staged(account, now)?;
        entry.weight = entry
            .weight
            .checked_add(amount)
            .ok_or(EngineError::Overflow)?;
        acc.total_weight = acc
            .total_weight
            .checked_add(amount)
            .ok_or(EngineError::Overflow)?;
        custody.pull(account, amount)?;
        self.commit(account, acc, entry);
        tracing::debug!(account = %account, amount, "deposit committed");
        self.events.emit(&PoolEvent::Deposit {
            account: account.clone(),
            amount,
        });
        Ok(())
    }

    /// Full exit: return `account`'s principal and settled reward in one
    /// operation. Returns `(principal, reward)` paid out.
    pub fn withdraw(
        &mut self,
        custody: &dyn Custody,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<(u128, u128), EngineError> {
        if !self.is_active(account) {
            return Err(EngineError::NoActiveStake);
        }
        let (mut acc, mut entry) = self.settle_staged(account, now)?;
        let principal = entry.weight;
        let reward = entry.stored_reward;
        entry.weight = 0;
        entry.stored_reward = 0;
        acc.total_weight = acc
            .total_weight
            .checked_sub(principal)
            .ok_or(EngineError::Overflow)?;
        custody.push(account, principal)?;
        if reward > 0 {
            custody.pay_reward(account, reward)?;
        }
        self.commit(account, acc, entry);
        tracing::debug!(account = %account, principal, reward, "withdraw committed");
        self.events.emit(&PoolEvent::Withdraw {
            account: account.clone(),
            principal,
            reward,
        });
        Ok((principal, reward))
    }

    /// Pay out `account`'s settled reward, leaving the stake active.
    /// Returns the reward paid.
    pub fn claim(
        &mut self,
        custody: &dyn Custody,
        account: &AccountId,
        now: Timestamp,
    ) -> Result<u128, EngineError> {
        if !self.is_active(account) {
            return Err(EngineError::NoActiveStake);
        }
        let (acc, mut entry) = self.settle_staged(account, now)?;
        let reward = entry.stored_reward;
        entry.stored_reward = 0;
        if reward > 0 {
            custody.pay_reward(account, reward)?;
        }
        self.commit(account, acc, entry);
        tracing::debug!(account = %account, reward, "claim committed");
        self.events.emit(&PoolEvent::Claim {
            account: account.clone(),
            reward,
        });
        Ok(reward)
    }

    /// Weight and projected reward for `account` as of `now`, via a
    /// read-only settlement against the live index. Callable by the
    /// account itself or the pool owner.
    pub fn account_status(
        &self,
        account: &AccountId,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<AccountStatus, EngineError> {
        access::require_self_or_owner(caller, account, &self.owner)?;
        let index = self.accumulator.index_at(now)?;
        let entry = self
            .accounts
            .get(account)
            .copied()
            .unwrap_or_else(|| StakeEntry::new(index));
        Ok(AccountStatus {
            weight: entry.weight,
            projected_reward: entry.projected_reward(index)?,
        })
    }

    /// Owner-only diagnostic: raw reward emitted since the last global
    /// settlement, independent of any per-account split.
    pub fn pending_emission(
        &self,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<u128, EngineError> {
        access::require_owner(caller, &self.owner)?;
        self.accumulator.pending_emission(now)
    }
}

impl PoolEngine {
    /// Persist the pool snapshot through a store collaborator.
    pub fn save_to_store(&self, store: &dyn PoolStore) -> Result<(), EngineError> {
        let acc = bincode::serialize(&self.accumulator)
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        store
            .put_meta(META_ACCUMULATOR, &acc)
            .map_err(|e| EngineError::Storage(e.to_string()))?;

        let owner =
            bincode::serialize(&self.owner).map_err(|e| EngineError::Storage(e.to_string()))?;
        store
            .put_meta(META_OWNER, &owner)
            .map_err(|e| EngineError::Storage(e.to_string()))?;

        for (account, entry) in &self.accounts {
            let bytes =
                bincode::serialize(entry).map_err(|e| EngineError::Storage(e.to_string()))?;
            store
                .put_entry(account, &bytes)
                .map_err(|e| EngineError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore a pool snapshot from a store collaborator.
    ///
    /// Event listeners are not persisted; the restored engine starts with
    /// an empty bus.
    pub fn load_from_store(store: &dyn PoolStore) -> Result<Self, EngineError> {
        let acc_bytes = store
            .get_meta(META_ACCUMULATOR)
            .map_err(|e| EngineError::Storage(e.to_string()))?
            .ok_or_else(|| EngineError::Storage("snapshot has no accumulator".into()))?;
        let accumulator: RewardAccumulator = bincode::deserialize(&acc_bytes)
            .map_err(|e| EngineError::Storage(e.to_string()))?;

        let owner_bytes = store
            .get_meta(META_OWNER)
            .map_err(|e| EngineError::Storage(e.to_string()))?
            .ok_or_else(|| EngineError::Storage("snapshot has no owner".into()))?;
        let owner: AccountId = bincode::deserialize(&owner_bytes)
            .map_err(|e| EngineError::Storage(e.to_string()))?;

        let mut accounts = HashMap::new();
        for (account, bytes) in store
            .iter_entries()
            .map_err(|e| EngineError::Storage(e.to_string()))?
        {
            let entry: StakeEntry = bincode::deserialize(&bytes)
                .map_err(|e| EngineError::Storage(e.to_string()))?;
            accounts.insert(account, entry);
        }

        Ok(Self {
            accumulator,
            accounts,
            owner,
            events: EventBus::new(),
        })
    }
}
