//! Nullable store: thread-safe in-memory wallet storage.

use std::collections::HashMap;
use std::sync::Mutex;

use trx_store::{StoreError, WalletStore};

/// In-memory [`WalletStore`] that counts saves and can be made to fail.
pub struct NullStore {
    staged: Mutex<HashMap<String, String>>,
    saved: Mutex<HashMap<String, String>>,
    save_count: Mutex<usize>,
    fail_saves: Mutex<bool>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            staged: Mutex::new(HashMap::new()),
            saved: Mutex::new(HashMap::new()),
            save_count: Mutex::new(0),
            fail_saves: Mutex::new(false),
        }
    }

    /// A store pre-seeded with `key = value`, as if saved by an earlier session.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.staged.lock().unwrap().insert(key.into(), value.into());
        store.saved.lock().unwrap().insert(key.into(), value.into());
        store
    }

    /// The value as of the last successful `save`.
    pub fn saved(&self, key: &str) -> Option<String> {
        self.saved.lock().unwrap().get(key).cloned()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    /// Make subsequent `save` calls fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore for NullStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.staged.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.staged.lock().unwrap().insert(key.into(), value.into());
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Backend("null store configured to fail".into()));
        }
        let staged = self.staged.lock().unwrap().clone();
        *self.saved.lock().unwrap() = staged;
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}
