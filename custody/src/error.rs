//! Custody failure taxonomy.

use thiserror::Error;

/// Rejection of a requested asset movement.
///
/// A variant carried inside an engine error is exactly what the custody
/// implementation reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CustodyError {
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    #[error("insufficient pool balance: need {needed}, available {available}")]
    InsufficientPoolBalance { needed: u128, available: u128 },
}
