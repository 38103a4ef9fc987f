//! Null store — thread-safe in-memory snapshot storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use streampool_store::{PoolStore, StoreError};
use streampool_types::AccountId;

/// An in-memory [`PoolStore`].
pub struct NullPoolStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullPoolStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullPoolStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolStore for NullPoolStore {
    fn get_entry(&self, account: &AccountId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.lock().unwrap().get(account.as_str()).cloned())
    }

    fn put_entry(&self, account: &AccountId, bytes: &[u8]) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(account.as_str().to_string(), bytes.to_vec());
        Ok(())
    }

    fn iter_entries(&self) -> Result<Vec<(AccountId, Vec<u8>)>, StoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (AccountId::new(k.clone()), v.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
