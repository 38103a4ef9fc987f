//! Engine-specific errors.

use streampool_custody::CustodyError;
use thiserror::Error;

/// Every failure is a well-defined rejection of a single operation; the
/// operation leaves no partial state behind. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("deposit amount must be non-zero")]
    InvalidAmount,

    #[error("account has no active stake")]
    NoActiveStake,

    #[error("caller is not authorized for this query")]
    Unauthorized,

    /// Custody rejections pass through unchanged.
    #[error(transparent)]
    Custody(#[from] CustodyError),

    #[error("arithmetic overflow in reward computation")]
    Overflow,

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),
}
