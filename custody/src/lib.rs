//! Abstract custody interface for the pool's two assets.
//!
//! Moving value is an external concern. The engine never inspects balances
//! and never holds assets; it requests movements through [`Custody`] and
//! treats a rejection as an instruction to abort the whole operation.
//! Rejections reach callers verbatim, never reinterpreted.

pub mod error;

pub use error::CustodyError;

use streampool_types::AccountId;

/// Moves the staked principal and the reward asset in and out of the pool.
///
/// Implementations decide what the assets actually are (native value,
/// tokens, database rows). All requests issued within one engine operation
/// must be applied atomically by the implementation; the engine commits its
/// own state only after every request has been accepted.
pub trait Custody {
    /// Pull `amount` of principal from `from` into the pool.
    fn pull(&self, from: &AccountId, amount: u128) -> Result<(), CustodyError>;

    /// Push `amount` of principal from the pool back to `to`.
    fn push(&self, to: &AccountId, amount: u128) -> Result<(), CustodyError>;

    /// Pay `amount` of the reward asset out of the pool's reward funds to `to`.
    fn pay_reward(&self, to: &AccountId, amount: u128) -> Result<(), CustodyError>;
}
