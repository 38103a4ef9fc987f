//! Events emitted on committed pool mutations for subscribers.

use streampool_types::AccountId;

/// One event per committed mutating operation, carrying the identity and
/// the resulting amounts. Consumed by external observers and indexers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolEvent {
    /// Principal entered the pool.
    Deposit { account: AccountId, amount: u128 },
    /// Full exit: principal and settled reward both left the pool.
    Withdraw {
        account: AccountId,
        principal: u128,
        reward: u128,
    },
    /// Settled reward was paid out; the stake stays active.
    Claim { account: AccountId, reward: u128 },
}

/// Synchronous fan-out bus for pool events.
///
/// Listeners run inline on the emitting call; keep handlers fast to avoid
/// stalling operations.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&PoolEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&PoolEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &PoolEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
