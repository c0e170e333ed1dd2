//! Wire types of the node's REST API.

use serde::{Deserialize, Serialize};
use trx_types::{Amount, LatestBlock};

use crate::error::RpcError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub balance: Option<Amount>,
}

/// Activated account details. Only the fields the wallet reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub balance: Option<Amount>,
    #[serde(default)]
    pub create_time: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResources {
    #[serde(rename = "freeNetLimit", default)]
    pub free_net_limit: u64,
    #[serde(rename = "freeNetUsed", default)]
    pub free_net_used: u64,
}

impl AccountResources {
    /// Free bandwidth left today.
    pub fn free_bandwidth(&self) -> u64 {
        self.free_net_limit.saturating_sub(self.free_net_used)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatestBlockResponse {
    #[serde(rename = "blockID")]
    pub block_id: String,
    pub number: u64,
    pub timestamp: u64,
}

impl TryFrom<LatestBlockResponse> for LatestBlock {
    type Error = RpcError;

    fn try_from(resp: LatestBlockResponse) -> Result<Self, Self::Error> {
        let mut id = [0u8; 32];
        hex::decode_to_slice(&resp.block_id, &mut id)
            .map_err(|e| RpcError::InvalidResponse(format!("blockID {}: {e}", resp.block_id)))?;
        Ok(LatestBlock {
            id,
            number: resp.number,
            timestamp: resp.timestamp,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnergyEstimate {
    pub energy: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
}

impl SubmitResponse {
    pub const SUCCESS: &'static str = "SUCCESS";

    pub fn is_success(&self) -> bool {
        self.code.as_deref() == Some(Self::SUCCESS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub fingerprint: Option<String>,
}

/// One page of a history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPage<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> TransactionsPage<T> {
    pub fn fingerprint(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.fingerprint.as_deref())
    }
}

/// A full ledger record from the account transactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "txID")]
    pub tx_id: String,
    #[serde(default)]
    pub raw_data: RawData,
    #[serde(default)]
    pub ret: Vec<TxResult>,
    #[serde(default)]
    pub block_timestamp: u64,
    #[serde(default)]
    pub confirmations: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub contract: Vec<RawContract>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContract {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub parameter: ContractParameter,
}

/// The decoded contract body; its shape depends on the contract type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractParameter {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub type_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxResult {
    #[serde(rename = "contractRet", default)]
    pub contract_ret: Option<String>,
    #[serde(default)]
    pub fee: Amount,
}

/// A pre-normalized record from the TRC20 transfers endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trc20Transfer {
    pub transaction_id: String,
    pub from: String,
    pub to: String,
    pub value: Amount,
    #[serde(default)]
    pub block_timestamp: u64,
}
