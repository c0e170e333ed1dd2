//! Wallet-local storage.
//!
//! The wallet persists a handful of string values (its last known balance) through
//! the [`WalletStore`] trait. Backends: [`JsonFileStore`] here, and an in-memory
//! store in `trx-nullables` for tests.

pub mod error;
pub mod json_file;
pub mod wallet;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use wallet::{WalletStore, BALANCE_KEY};
