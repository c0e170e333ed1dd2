//! Normalized, paginated transaction history.
//!
//! Raw ledger records come in several shapes. Each contract type is decoded by
//! its own function into a [`ContractRecord`]; unknown or malformed contracts
//! degrade to [`ContractRecord::Unsupported`] instead of failing the page.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use trx_crypto::encode_address;
use trx_rpc::{
    has_more, NodeClient, PageRequest, RawContract, RawTransaction, Trc20Transfer, MAX_PAGE_SIZE,
};
use trx_transactions::decode_transfer_call;
use trx_types::{Address, Amount, AssetKind, NetworkId, Timestamp};

use crate::WalletError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TxAction {
    Transfer,
    TokenTransfer,
}

/// One history row as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: Amount,
    pub incoming: bool,
    /// Absent for records from the token ledger, which does not report fees.
    pub fee: Option<Amount>,
    pub timestamp: Timestamp,
    pub confirmations: u64,
    pub min_confirmations: u64,
    pub status: TxStatus,
    pub token_address: Option<String>,
    pub action: TxAction,
    pub url: String,
}

impl HistoryEntry {
    /// Amount signed by direction: positive when received.
    pub fn signed_amount(&self) -> i128 {
        let raw = i128::try_from(self.amount.raw()).unwrap_or(i128::MAX);
        if self.incoming {
            raw
        } else {
            -raw
        }
    }
}

/// The first contract of a ledger record, decoded by type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractRecord {
    Transfer {
        owner: Address,
        to: Address,
        amount: Amount,
    },
    Trigger {
        owner: Address,
        contract: Address,
        to: Address,
        amount: Amount,
    },
    /// Known sender at best; recipient empty, amount zero.
    Unsupported { owner: Option<Address> },
}

impl ContractRecord {
    pub fn decode(contract: &RawContract) -> Self {
        let value = &contract.parameter.value;
        let decoded = match contract.kind.as_str() {
            "TransferContract" => decode_transfer(value),
            "TriggerSmartContract" => decode_trigger(value),
            _ => None,
        };
        decoded.unwrap_or_else(|| {
            debug!(kind = %contract.kind, "unsupported contract in history");
            Self::Unsupported {
                owner: hex_address(value, "owner_address"),
            }
        })
    }
}

fn hex_address(value: &Value, field: &str) -> Option<Address> {
    value
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| Address::from_hex(s).ok())
}

fn decode_transfer(value: &Value) -> Option<ContractRecord> {
    Some(ContractRecord::Transfer {
        owner: hex_address(value, "owner_address")?,
        to: hex_address(value, "to_address")?,
        amount: Amount::from(value.get("amount").and_then(Value::as_u64).unwrap_or(0)),
    })
}

fn decode_trigger(value: &Value) -> Option<ContractRecord> {
    let data = value.get("data").and_then(Value::as_str)?;
    let data = hex::decode(data).ok()?;
    let (to, amount) = decode_transfer_call(&data).ok()?;
    Some(ContractRecord::Trigger {
        owner: hex_address(value, "owner_address")?,
        contract: hex_address(value, "contract_address")?,
        to,
        amount,
    })
}

/// One page of normalized history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryPage {
    pub transactions: Vec<HistoryEntry>,
    pub has_more: bool,
    /// Fingerprint for the next page; `None` when the page was empty.
    pub cursor: Option<String>,
}

/// Loads history pages and keeps every entry seen this session addressable by id.
#[derive(Debug)]
pub struct TransactionHistory {
    page_size: u32,
    min_confirmations: u64,
    network: NetworkId,
    index: HashMap<String, HistoryEntry>,
}

impl TransactionHistory {
    /// `page_size` is clamped to what the node accepts, `1..=MAX_PAGE_SIZE`.
    pub fn new(page_size: u32, min_confirmations: u64, network: NetworkId) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            min_confirmations,
            network,
            index: HashMap::new(),
        }
    }

    /// Fetch one page. Without a cursor the index starts over.
    pub async fn load_page<N: NodeClient>(
        &mut self,
        node: &N,
        asset: &AssetKind,
        own: &Address,
        cursor: Option<String>,
    ) -> Result<HistoryPage, WalletError> {
        if cursor.is_none() {
            self.index.clear();
        }
        let own_text = encode_address(own);
        let request = PageRequest::new(self.page_size, cursor);

        let (transactions, fingerprint) = match asset {
            AssetKind::Coin => {
                let page = node.transactions(&own_text, &request).await?;
                let fingerprint = page.fingerprint().map(str::to_string);
                let entries = page
                    .data
                    .iter()
                    .map(|tx| self.normalize_ledger(tx, own))
                    .collect::<Vec<_>>();
                (entries, fingerprint)
            }
            AssetKind::Token { contract } => {
                let contract_text = encode_address(contract);
                let page = node
                    .token_transactions(&own_text, &contract_text, &request)
                    .await?;
                let fingerprint = page.fingerprint().map(str::to_string);
                let entries = page
                    .data
                    .iter()
                    .map(|tx| self.normalize_token(tx, &own_text, &contract_text))
                    .collect::<Vec<_>>();
                (entries, fingerprint)
            }
        };

        // Every returned record yields exactly one entry.
        for entry in &transactions {
            self.index.insert(entry.id.clone(), entry.clone());
        }
        let cursor = if transactions.is_empty() {
            None
        } else {
            fingerprint
        };
        Ok(HistoryPage {
            has_more: has_more(transactions.len(), self.page_size),
            transactions,
            cursor,
        })
    }

    /// An entry from a page loaded earlier in this session.
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.index.get(id)
    }

    fn status(&self, tx: &RawTransaction) -> TxStatus {
        match tx.ret.first().and_then(|r| r.contract_ret.as_deref()) {
            Some("SUCCESS") if tx.confirmations >= self.min_confirmations => TxStatus::Success,
            Some("SUCCESS") | None => TxStatus::Pending,
            Some(_) => TxStatus::Failed,
        }
    }

    fn url(&self, id: &str) -> String {
        format!("{}/#/transaction/{id}", self.network.explorer_url())
    }

    fn normalize_ledger(&self, tx: &RawTransaction, own: &Address) -> HistoryEntry {
        let record = match tx.raw_data.contract.first() {
            Some(contract) => ContractRecord::decode(contract),
            None => {
                warn!(id = %tx.tx_id, "ledger record without contract");
                ContractRecord::Unsupported { owner: None }
            }
        };
        let fee = tx.ret.first().map(|r| r.fee).unwrap_or_default();

        let (from, to, amount, incoming, token_address, action) = match record {
            ContractRecord::Transfer { owner, to, amount } => (
                encode_address(&owner),
                encode_address(&to),
                amount,
                to == *own,
                None,
                TxAction::Transfer,
            ),
            ContractRecord::Trigger {
                owner,
                contract,
                to,
                amount,
            } => (
                encode_address(&owner),
                encode_address(&to),
                amount,
                to == *own,
                Some(encode_address(&contract)),
                TxAction::TokenTransfer,
            ),
            ContractRecord::Unsupported { owner } => (
                owner.as_ref().map(encode_address).unwrap_or_default(),
                String::new(),
                Amount::ZERO,
                owner.as_ref() != Some(own),
                None,
                TxAction::Transfer,
            ),
        };

        HistoryEntry {
            url: self.url(&tx.tx_id),
            id: tx.tx_id.clone(),
            from,
            to,
            amount,
            incoming,
            fee: Some(fee),
            timestamp: Timestamp::from_millis(tx.block_timestamp),
            confirmations: tx.confirmations,
            min_confirmations: self.min_confirmations,
            status: self.status(tx),
            token_address,
            action,
        }
    }

    fn normalize_token(&self, tx: &Trc20Transfer, own: &str, contract: &str) -> HistoryEntry {
        HistoryEntry {
            url: self.url(&tx.transaction_id),
            id: tx.transaction_id.clone(),
            from: tx.from.clone(),
            to: tx.to.clone(),
            amount: tx.value,
            incoming: tx.to == own,
            fee: None,
            timestamp: Timestamp::from_millis(tx.block_timestamp),
            confirmations: 0,
            min_confirmations: 0,
            status: TxStatus::Success,
            token_address: Some(contract.to_string()),
            action: TxAction::TokenTransfer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trx_rpc::ContractParameter;

    fn contract(kind: &str, value: Value) -> RawContract {
        RawContract {
            kind: kind.to_string(),
            parameter: ContractParameter {
                value,
                type_url: None,
            },
        }
    }

    #[test]
    fn decodes_transfer() {
        let record = ContractRecord::decode(&contract(
            "TransferContract",
            json!({
                "amount": 2_000_000,
                "owner_address": "4174a02d09dc08f660d2b62a1db6a1663b02a8c237",
                "to_address": "411a41bdbc52411415d212afe9efc63cf6b8abb417",
            }),
        ));
        match record {
            ContractRecord::Transfer { amount, to, .. } => {
                assert_eq!(amount, Amount::new(2_000_000));
                assert_eq!(encode_address(&to), "TCN3Kpdp9FTE244dnDu5jGSxsPSYuDzh6o");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decodes_trigger_call_data() {
        let to = Address::from_hex("411a41bdbc52411415d212afe9efc63cf6b8abb417").unwrap();
        let data = trx_transactions::encode_transfer_call(&to, Amount::new(2_000_000));
        let record = ContractRecord::decode(&contract(
            "TriggerSmartContract",
            json!({
                "owner_address": "4174a02d09dc08f660d2b62a1db6a1663b02a8c237",
                "contract_address": "41a614f803b6fd780986a42c78ec9c7f77e6ded13c",
                "data": hex::encode(data),
            }),
        ));
        match record {
            ContractRecord::Trigger { to: got, amount, contract, .. } => {
                assert_eq!(got, to);
                assert_eq!(amount, Amount::new(2_000_000));
                assert_eq!(encode_address(&contract), "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_contract_keeps_owner() {
        let record = ContractRecord::decode(&contract(
            "FreezeBalanceV2Contract",
            json!({ "owner_address": "4174a02d09dc08f660d2b62a1db6a1663b02a8c237" }),
        ));
        assert!(matches!(record, ContractRecord::Unsupported { owner: Some(_) }));
    }

    #[test]
    fn malformed_trigger_degrades() {
        let record = ContractRecord::decode(&contract(
            "TriggerSmartContract",
            json!({ "owner_address": "zz", "data": "095ea7b3" }),
        ));
        assert_eq!(record, ContractRecord::Unsupported { owner: None });
    }

    #[test]
    fn signed_amount_follows_direction() {
        let mut entry = HistoryEntry {
            id: "a".into(),
            from: String::new(),
            to: String::new(),
            amount: Amount::new(5),
            incoming: true,
            fee: None,
            timestamp: Timestamp::from_millis(0),
            confirmations: 0,
            min_confirmations: 0,
            status: TxStatus::Success,
            token_address: None,
            action: TxAction::Transfer,
            url: String::new(),
        };
        assert_eq!(entry.signed_amount(), 5);
        entry.incoming = false;
        assert_eq!(entry.signed_amount(), -5);
    }
}
