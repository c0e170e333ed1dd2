//! The collaborator boundary between the wallet and a node.

use async_trait::async_trait;
use trx_types::{Amount, ChainParameters, LatestBlock};

use crate::error::RpcError;
use crate::pagination::PageRequest;
use crate::types::{AccountInfo, AccountResources, RawTransaction, SubmitResponse, Trc20Transfer, TransactionsPage};

/// Read and submit operations the wallet needs from a node.
///
/// Addresses are passed in their `T...` text form. Implementations do not retry.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Native balance in sun. A missing balance reads as zero.
    async fn coin_balance(&self, address: &str) -> Result<Amount, RpcError>;

    /// TRC20 balance of `address` for the token contract `token`.
    async fn token_balance(&self, address: &str, token: &str) -> Result<Amount, RpcError>;

    /// Account details, or `None` if the account has never been activated.
    async fn account(&self, address: &str) -> Result<Option<AccountInfo>, RpcError>;

    /// Current bandwidth allowance of `address`.
    async fn resources(&self, address: &str) -> Result<AccountResources, RpcError>;

    /// Fee constants, with defaults filled in for anything the node omits.
    async fn chain_parameters(&self) -> Result<ChainParameters, RpcError>;

    async fn latest_block(&self) -> Result<LatestBlock, RpcError>;

    /// Energy a TRC20 `transfer(to, value)` from `from` would consume.
    async fn estimate_energy(
        &self,
        token: &str,
        from: &str,
        to: &str,
        value: Amount,
    ) -> Result<u64, RpcError>;

    /// Submit hex-encoded signed transaction bytes.
    async fn submit_transaction(&self, transaction_hex: &str) -> Result<SubmitResponse, RpcError>;

    async fn transactions(
        &self,
        address: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<RawTransaction>, RpcError>;

    async fn token_transactions(
        &self,
        address: &str,
        token: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<Trc20Transfer>, RpcError>;
}

#[async_trait]
impl<T: NodeClient + ?Sized> NodeClient for std::sync::Arc<T> {
    async fn coin_balance(&self, address: &str) -> Result<Amount, RpcError> {
        (**self).coin_balance(address).await
    }

    async fn token_balance(&self, address: &str, token: &str) -> Result<Amount, RpcError> {
        (**self).token_balance(address, token).await
    }

    async fn account(&self, address: &str) -> Result<Option<AccountInfo>, RpcError> {
        (**self).account(address).await
    }

    async fn resources(&self, address: &str) -> Result<AccountResources, RpcError> {
        (**self).resources(address).await
    }

    async fn chain_parameters(&self) -> Result<ChainParameters, RpcError> {
        (**self).chain_parameters().await
    }

    async fn latest_block(&self) -> Result<LatestBlock, RpcError> {
        (**self).latest_block().await
    }

    async fn estimate_energy(
        &self,
        token: &str,
        from: &str,
        to: &str,
        value: Amount,
    ) -> Result<u64, RpcError> {
        (**self).estimate_energy(token, from, to, value).await
    }

    async fn submit_transaction(&self, transaction_hex: &str) -> Result<SubmitResponse, RpcError> {
        (**self).submit_transaction(transaction_hex).await
    }

    async fn transactions(
        &self,
        address: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<RawTransaction>, RpcError> {
        (**self).transactions(address, page).await
    }

    async fn token_transactions(
        &self,
        address: &str,
        token: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<Trc20Transfer>, RpcError> {
        (**self).token_transactions(address, token, page).await
    }
}
