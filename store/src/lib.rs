//! Abstract persistence for pool snapshots.
//!
//! Storage backends implement [`PoolStore`]. The engine serializes its own
//! state and hands the store opaque bytes, so backends never depend on
//! engine types and the engine never depends on a concrete backend.

pub mod error;

pub use error::StoreError;

use streampool_types::AccountId;

/// Store for persisted pool state: one blob per account ledger entry plus
/// metadata keys for pool-wide state.
pub trait PoolStore {
    fn get_entry(&self, account: &AccountId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_entry(&self, account: &AccountId, bytes: &[u8]) -> Result<(), StoreError>;
    fn iter_entries(&self) -> Result<Vec<(AccountId, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
