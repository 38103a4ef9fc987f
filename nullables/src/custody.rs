//! Null custody — in-memory asset movements for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use streampool_custody::{Custody, CustodyError};
use streampool_types::AccountId;

/// An in-memory custody collaborator.
///
/// Tracks external principal balances, the allowance each account has
/// granted the pool, the principal held by the pool, the pool's reward
/// funds, and the reward paid out per account. Thread-safe so engines can
/// be exercised from multi-threaded tests.
pub struct NullCustody {
    balances: Mutex<HashMap<String, u128>>,
    allowances: Mutex<HashMap<String, u128>>,
    pool_principal: Mutex<u128>,
    pool_rewards: Mutex<u128>,
    rewards_paid: Mutex<HashMap<String, u128>>,
}

impl NullCustody {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            allowances: Mutex::new(HashMap::new()),
            pool_principal: Mutex::new(0),
            pool_rewards: Mutex::new(0),
            rewards_paid: Mutex::new(HashMap::new()),
        }
    }

    /// Credit external principal balance to an account.
    pub fn fund_account(&self, account: &AccountId, amount: u128) {
        *self
            .balances
            .lock()
            .unwrap()
            .entry(account.as_str().to_string())
            .or_default() += amount;
    }

    /// Set the allowance the pool may pull from `account`.
    pub fn approve(&self, account: &AccountId, amount: u128) {
        self.allowances
            .lock()
            .unwrap()
            .insert(account.as_str().to_string(), amount);
    }

    /// Credit the pool's reward funds.
    pub fn fund_rewards(&self, amount: u128) {
        *self.pool_rewards.lock().unwrap() += amount;
    }

    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(0)
    }

    pub fn allowance_of(&self, account: &AccountId) -> u128 {
        self.allowances
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(0)
    }

    pub fn pool_principal(&self) -> u128 {
        *self.pool_principal.lock().unwrap()
    }

    pub fn pool_rewards(&self) -> u128 {
        *self.pool_rewards.lock().unwrap()
    }

    /// Total reward asset ever paid out to `account`.
    pub fn reward_paid_to(&self, account: &AccountId) -> u128 {
        self.rewards_paid
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for NullCustody {
    fn default() -> Self {
        Self::new()
    }
}

impl Custody for NullCustody {
    fn pull(&self, from: &AccountId, amount: u128) -> Result<(), CustodyError> {
        let mut balances = self.balances.lock().unwrap();
        let balance = balances.get(from.as_str()).copied().unwrap_or(0);
        if balance < amount {
            return Err(CustodyError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }
        let mut allowances = self.allowances.lock().unwrap();
        let approved = allowances.get(from.as_str()).copied().unwrap_or(0);
        if approved < amount {
            return Err(CustodyError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        balances.insert(from.as_str().to_string(), balance - amount);
        allowances.insert(from.as_str().to_string(), approved - amount);
        *self.pool_principal.lock().unwrap() += amount;
        Ok(())
    }

    fn push(&self, to: &AccountId, amount: u128) -> Result<(), CustodyError> {
        let mut held = self.pool_principal.lock().unwrap();
        if *held < amount {
            return Err(CustodyError::InsufficientPoolBalance {
                needed: amount,
                available: *held,
            });
        }
        *held -= amount;
        *self
            .balances
            .lock()
            .unwrap()
            .entry(to.as_str().to_string())
            .or_default() += amount;
        Ok(())
    }

    fn pay_reward(&self, to: &AccountId, amount: u128) -> Result<(), CustodyError> {
        let mut funds = self.pool_rewards.lock().unwrap();
        if *funds < amount {
            return Err(CustodyError::InsufficientPoolBalance {
                needed: amount,
                available: *funds,
            });
        }
        *funds -= amount;
        *self
            .rewards_paid
            .lock()
            .unwrap()
            .entry(to.as_str().to_string())
            .or_default() += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(name: &str) -> AccountId {
        AccountId::new(name)
    }

    #[test]
    fn pull_requires_balance_then_allowance() {
        let custody = NullCustody::new();
        let alice = acct("alice");

        let err = custody.pull(&alice, 100).unwrap_err();
        assert_eq!(
            err,
            CustodyError::InsufficientBalance {
                needed: 100,
                available: 0
            }
        );

        custody.fund_account(&alice, 100);
        let err = custody.pull(&alice, 100).unwrap_err();
        assert_eq!(
            err,
            CustodyError::InsufficientAllowance {
                needed: 100,
                approved: 0
            }
        );

        custody.approve(&alice, 100);
        custody.pull(&alice, 100).unwrap();
        assert_eq!(custody.balance_of(&alice), 0);
        assert_eq!(custody.allowance_of(&alice), 0);
        assert_eq!(custody.pool_principal(), 100);
    }

    #[test]
    fn push_returns_principal_to_account() {
        let custody = NullCustody::new();
        let alice = acct("alice");
        custody.fund_account(&alice, 50);
        custody.approve(&alice, 50);
        custody.pull(&alice, 50).unwrap();

        custody.push(&alice, 30).unwrap();
        assert_eq!(custody.balance_of(&alice), 30);
        assert_eq!(custody.pool_principal(), 20);

        let err = custody.push(&alice, 21).unwrap_err();
        assert_eq!(
            err,
            CustodyError::InsufficientPoolBalance {
                needed: 21,
                available: 20
            }
        );
    }

    #[test]
    fn pay_reward_draws_from_reward_funds() {
        let custody = NullCustody::new();
        let alice = acct("alice");

        let err = custody.pay_reward(&alice, 10).unwrap_err();
        assert_eq!(
            err,
            CustodyError::InsufficientPoolBalance {
                needed: 10,
                available: 0
            }
        );

        custody.fund_rewards(25);
        custody.pay_reward(&alice, 10).unwrap();
        custody.pay_reward(&alice, 5).unwrap();
        assert_eq!(custody.reward_paid_to(&alice), 15);
        assert_eq!(custody.pool_rewards(), 10);
    }
}
