//! Wallet core for TRX and TRC20 tokens.
//!
//! Provides everything a wallet application needs on top of a node:
//! - Wallet lifecycle (create from seed, open watch-only, load balances)
//! - Address and amount validation with structured errors
//! - Fee estimation under the bandwidth/energy resource model
//! - Building, signing and submitting transfers with optimistic balance updates
//! - Paginated, normalized transaction history
//! - Key export

pub mod balance;
pub mod config;
pub mod error;
pub mod fee;
pub mod history;
pub mod wallet;

pub use balance::Balances;
pub use config::{AssetConfig, WalletConfig};
pub use error::WalletError;
pub use fee::FeeEstimator;
pub use history::{
    ContractRecord, HistoryEntry, HistoryPage, TransactionHistory, TxAction, TxStatus,
};
pub use wallet::{PrivateKeyExport, PublicKeyRecord, PublicKeySettings, Wallet};
