//! reqwest implementation of [`NodeClient`] against the node's `api/v1` REST surface.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use trx_types::{Amount, ChainParameters, LatestBlock};

use crate::client::NodeClient;
use crate::error::RpcError;
use crate::pagination::PageRequest;
use crate::types::{
    AccountInfo, AccountResources, BalanceResponse, EnergyEstimate, LatestBlockResponse,
    RawTransaction, SubmitResponse, Trc20Transfer, TransactionsPage,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HttpNodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpNodeClient {
    /// Create a client for `base_url` (e.g. `https://node.example.com/`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| RpcError::Transport(format!("failed to create HTTP client: {e}")))?;
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}api/v1/{path}", self.base_url)
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RpcError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(e.to_string()))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::read(response).await
    }
}

const NO_QUERY: &[(&str, &str)] = &[];

#[async_trait]
impl NodeClient for HttpNodeClient {
    async fn coin_balance(&self, address: &str) -> Result<Amount, RpcError> {
        let resp: BalanceResponse = self
            .get(&format!("account/{address}/balance"), NO_QUERY)
            .await?;
        Ok(resp.balance.unwrap_or_default())
    }

    async fn token_balance(&self, address: &str, token: &str) -> Result<Amount, RpcError> {
        let resp: BalanceResponse = self
            .get(&format!("account/{address}/trc20/{token}/balance"), NO_QUERY)
            .await?;
        Ok(resp.balance.unwrap_or_default())
    }

    async fn account(&self, address: &str) -> Result<Option<AccountInfo>, RpcError> {
        match self
            .get::<serde_json::Value, _>(&format!("account/{address}"), NO_QUERY)
            .await
        {
            Err(RpcError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
            Ok(serde_json::Value::Null) => Ok(None),
            Ok(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
            Ok(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| RpcError::InvalidResponse(format!("account: {e}"))),
        }
    }

    async fn resources(&self, address: &str) -> Result<AccountResources, RpcError> {
        self.get(&format!("account/{address}/resources"), NO_QUERY).await
    }

    async fn chain_parameters(&self) -> Result<ChainParameters, RpcError> {
        self.get("chainparameters", NO_QUERY).await
    }

    async fn latest_block(&self) -> Result<LatestBlock, RpcError> {
        let resp: LatestBlockResponse = self.get("latestblock", NO_QUERY).await?;
        LatestBlock::try_from(resp)
    }

    async fn estimate_energy(
        &self,
        token: &str,
        from: &str,
        to: &str,
        value: Amount,
    ) -> Result<u64, RpcError> {
        let value = value.to_string();
        let resp: EnergyEstimate = self
            .get(
                &format!("estimateenergy/{token}"),
                &[("from", from), ("to", to), ("value", value.as_str())],
            )
            .await?;
        Ok(resp.energy)
    }

    async fn submit_transaction(&self, transaction_hex: &str) -> Result<SubmitResponse, RpcError> {
        tracing::debug!("POST transaction/submit");
        let response = self
            .http
            .post(self.url("transaction/submit"))
            .json(&serde_json::json!({ "transaction": transaction_hex }))
            .send()
            .await?;
        Self::read(response).await
    }

    async fn transactions(
        &self,
        address: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<RawTransaction>, RpcError> {
        self.get(&format!("account/{address}/transactions"), page).await
    }

    async fn token_transactions(
        &self,
        address: &str,
        token: &str,
        page: &PageRequest,
    ) -> Result<TransactionsPage<Trc20Transfer>, RpcError> {
        self.get(&format!("account/{address}/trc20/{token}/transactions"), page)
            .await
    }
}
