//! Key-value storage trait used by the wallet.

use crate::StoreError;

/// Key under which the wallet keeps its spendable balance as a decimal string.
pub const BALANCE_KEY: &str = "balance";

/// String key-value storage with an explicit flush.
///
/// `set` only stages a value; `save` makes staged values durable.
pub trait WalletStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn save(&self) -> Result<(), StoreError>;
}

impl<T: WalletStore + ?Sized> WalletStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn save(&self) -> Result<(), StoreError> {
        (**self).save()
    }
}
