//! Owner/self access checks for the query surface.

use streampool_types::AccountId;

use crate::error::EngineError;

/// Only the pool owner passes.
pub fn require_owner(caller: &AccountId, owner: &AccountId) -> Result<(), EngineError> {
    if caller == owner {
        Ok(())
    } else {
        Err(EngineError::Unauthorized)
    }
}

/// The account itself or the pool owner passes.
pub fn require_self_or_owner(
    caller: &AccountId,
    account: &AccountId,
    owner: &AccountId,
) -> Result<(), EngineError> {
    if caller == account || caller == owner {
        Ok(())
    } else {
        Err(EngineError::Unauthorized)
    }
}
