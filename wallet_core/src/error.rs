use thiserror::Error;
use trx_crypto::CryptoError;
use trx_rpc::RpcError;
use trx_store::StoreError;
use trx_transactions::TransactionError;
use trx_types::{Amount, WalletState};

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("destination address is empty")]
    EmptyAddress,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("destination is the wallet's own address")]
    DestinationEqualsSource,

    #[error("amount is below the dust threshold of {dust_threshold}")]
    SmallAmount { dust_threshold: Amount },

    #[error("amount exceeds the maximum spendable {max_amount}")]
    BigAmount { max_amount: Amount },

    #[error("coin balance cannot cover the {required} fee of a token transfer")]
    InsufficientCoinForTokenTransaction { required: Amount },

    #[error("node rejected the fee; {required} required")]
    InsufficientFee { required: Amount },

    #[error("node rejected the transaction: {code}")]
    NodeRejected { code: String },

    #[error("node error: {0}")]
    Node(String),

    #[error("cannot {operation} while wallet is {state}")]
    InvalidState {
        operation: &'static str,
        state: WalletState,
    },

    #[error("signing error: {0}")]
    Signing(String),

    #[error("key error: {0}")]
    Key(String),

    #[error("transaction building error: {0}")]
    Transaction(String),

    #[error("storage error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<RpcError> for WalletError {
    fn from(e: RpcError) -> Self {
        Self::Node(e.to_string())
    }
}

impl From<StoreError> for WalletError {
    fn from(e: StoreError) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<CryptoError> for WalletError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::Locked => Self::Signing(e.to_string()),
            CryptoError::InvalidAddress(_) | CryptoError::InvalidChecksum => {
                Self::InvalidAddress(e.to_string())
            }
            other => Self::Key(other.to_string()),
        }
    }
}

impl From<TransactionError> for WalletError {
    fn from(e: TransactionError) -> Self {
        match e {
            TransactionError::InvalidAddress(msg) => Self::InvalidAddress(msg),
            TransactionError::Signing(msg) => Self::Signing(msg),
            other => Self::Transaction(other.to_string()),
        }
    }
}
