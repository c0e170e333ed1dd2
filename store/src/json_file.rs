//! A [`WalletStore`] backed by one JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{StoreError, WalletStore};

pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing values if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| StoreError::Corruption(format!("{}: {e}", path.display())))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }
}

impl WalletStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Write to a sibling temp file and rename it over the target.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&*self.lock()?)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "wallet store saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BALANCE_KEY;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("wallet.json")).unwrap();
        assert_eq!(store.get(BALANCE_KEY).unwrap(), None);
    }

    #[test]
    fn set_is_not_durable_until_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.set(BALANCE_KEY, "6000000").unwrap();
        assert_eq!(store.get(BALANCE_KEY).unwrap().as_deref(), Some("6000000"));
        assert!(!path.exists());

        store.save().unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(BALANCE_KEY).unwrap().as_deref(), Some("6000000"));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wallet.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        store.save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupted_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Corruption(_))
        ));
    }
}
