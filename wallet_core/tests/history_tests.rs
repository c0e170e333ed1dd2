//! History pagination and normalization against a nullable node.

use std::sync::Arc;

use serde_json::json;
use trx_nullables::{NullNodeClient, NullStore};
use trx_rpc::{ContractParameter, RawContract, RawData, RawTransaction, Trc20Transfer, TxResult};
use trx_types::Amount;
use trx_wallet_core::{AssetConfig, TxAction, TxStatus, Wallet, WalletConfig};

const SEED: &str = "3e818cec5efc7505369fae3f162af61130b673fa9b40e5955d5cde22a85afa03748d074356a281a5fc1dbd0b721357c56095a54de8d4bc6ecaa288f300776ae4";
const OWN: &str = "TLbsGXhkHe5jr37KNUKBfYETqSmQtRMceb";
const OWN_HEX: &str = "4174a02d09dc08f660d2b62a1db6a1663b02a8c237";
const OTHER: &str = "TCN3Kpdp9FTE244dnDu5jGSxsPSYuDzh6o";
const OTHER_HEX: &str = "411a41bdbc52411415d212afe9efc63cf6b8abb417";
const TOKEN: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
const TOKEN_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

type TestWallet = Wallet<Arc<NullNodeClient>, Arc<NullStore>>;

fn wallet(config: WalletConfig) -> (TestWallet, Arc<NullNodeClient>) {
    let node = Arc::new(NullNodeClient::new());
    let mut wallet = Wallet::new(config, node.clone(), Arc::new(NullStore::new())).unwrap();
    wallet.create(&hex::decode(SEED).unwrap()).unwrap();
    (wallet, node)
}

fn ledger_tx(id: &str, kind: &str, value: serde_json::Value, ret: Option<&str>, confirmations: u64) -> RawTransaction {
    RawTransaction {
        tx_id: id.to_string(),
        raw_data: RawData {
            contract: vec![RawContract {
                kind: kind.to_string(),
                parameter: ContractParameter {
                    value,
                    type_url: None,
                },
            }],
        },
        ret: ret
            .map(|code| {
                vec![TxResult {
                    contract_ret: Some(code.to_string()),
                    fee: Amount::new(100),
                }]
            })
            .unwrap_or_default(),
        block_timestamp: 1_654_251_831_000,
        confirmations,
    }
}

fn transfer(id: &str, from: &str, to: &str, amount: u64, ret: Option<&str>, confirmations: u64) -> RawTransaction {
    ledger_tx(
        id,
        "TransferContract",
        json!({ "owner_address": from, "to_address": to, "amount": amount }),
        ret,
        confirmations,
    )
}

fn token_transfer(id: &str, from: &str, to: &str, value: u128) -> Trc20Transfer {
    Trc20Transfer {
        transaction_id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: Amount::new(value),
        block_timestamp: 1_654_251_831_000,
    }
}

#[tokio::test]
async fn normalizes_coin_transfers() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.push_transactions_page(
        vec![
            transfer("in", OTHER_HEX, OWN_HEX, 2_000_000, Some("SUCCESS"), 30),
            transfer("out", OWN_HEX, OTHER_HEX, 1_000, Some("SUCCESS"), 3),
            transfer("failed", OWN_HEX, OTHER_HEX, 1_000, Some("REVERT"), 30),
        ],
        Some("fp1"),
    );
    let page = wallet.load_transactions(None).await.unwrap();
    assert!(!page.has_more);
    assert_eq!(page.cursor.as_deref(), Some("fp1"));

    let incoming = &page.transactions[0];
    assert!(incoming.incoming);
    assert_eq!(incoming.from, OTHER);
    assert_eq!(incoming.to, OWN);
    assert_eq!(incoming.amount, Amount::new(2_000_000));
    assert_eq!(incoming.signed_amount(), 2_000_000);
    assert_eq!(incoming.fee, Some(Amount::new(100)));
    assert_eq!(incoming.status, TxStatus::Success);
    assert_eq!(incoming.min_confirmations, 21);
    assert_eq!(incoming.action, TxAction::Transfer);
    assert_eq!(incoming.url, "https://tronscan.org/#/transaction/in");
    assert_eq!(incoming.timestamp.as_millis(), 1_654_251_831_000);

    let outgoing = &page.transactions[1];
    assert!(!outgoing.incoming);
    assert_eq!(outgoing.signed_amount(), -1_000);
    assert_eq!(outgoing.status, TxStatus::Pending);

    assert_eq!(page.transactions[2].status, TxStatus::Failed);
}

#[tokio::test]
async fn missing_result_is_pending() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.push_transactions_page(vec![transfer("a", OWN_HEX, OTHER_HEX, 1, None, 100)], None);
    let page = wallet.load_transactions(None).await.unwrap();
    assert_eq!(page.transactions[0].status, TxStatus::Pending);
    assert_eq!(page.transactions[0].fee, Some(Amount::ZERO));
}

#[tokio::test]
async fn decodes_token_calls_in_coin_history() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    let data = format!(
        "a9059cbb000000000000000000000000{}{:064x}",
        &OWN_HEX[2..],
        2_000_000u64
    );
    node.push_transactions_page(
        vec![ledger_tx(
            "call",
            "TriggerSmartContract",
            json!({ "owner_address": OTHER_HEX, "contract_address": TOKEN_HEX, "data": data }),
            Some("SUCCESS"),
            25,
        )],
        None,
    );
    let page = wallet.load_transactions(None).await.unwrap();
    let entry = &page.transactions[0];
    assert!(entry.incoming);
    assert_eq!(entry.to, OWN);
    assert_eq!(entry.amount, Amount::new(2_000_000));
    assert_eq!(entry.token_address.as_deref(), Some(TOKEN));
    assert_eq!(entry.action, TxAction::TokenTransfer);
}

#[tokio::test]
async fn unsupported_contract_degrades() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.push_transactions_page(
        vec![
            ledger_tx(
                "freeze",
                "FreezeBalanceV2Contract",
                json!({ "owner_address": OWN_HEX, "frozen_balance": 5 }),
                Some("SUCCESS"),
                30,
            ),
            transfer("ok", OTHER_HEX, OWN_HEX, 7, Some("SUCCESS"), 30),
        ],
        None,
    );
    let page = wallet.load_transactions(None).await.unwrap();
    assert_eq!(page.transactions.len(), 2);
    let degraded = &page.transactions[0];
    assert_eq!(degraded.from, OWN);
    assert_eq!(degraded.to, "");
    assert_eq!(degraded.amount, Amount::ZERO);
    assert!(!degraded.incoming);
    assert_eq!(page.transactions[1].amount, Amount::new(7));
}

#[tokio::test]
async fn has_more_only_for_full_pages() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    let full = (0..5)
        .map(|i| transfer(&format!("tx{i}"), OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30))
        .collect();
    node.push_transactions_page(full, Some("fp1"));
    node.push_transactions_page(vec![transfer("tx5", OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30)], Some("fp2"));

    let first = wallet.load_transactions(None).await.unwrap();
    assert!(first.has_more);
    assert_eq!(first.cursor.as_deref(), Some("fp1"));

    let second = wallet.load_transactions(first.cursor).await.unwrap();
    assert!(!second.has_more);

    let requests = node.page_requests();
    assert_eq!(requests[0].limit, 5);
    assert_eq!(requests[0].cursor, None);
    assert_eq!(requests[1].cursor.as_deref(), Some("fp1"));

    assert!(wallet.load_transaction("tx0").is_some());
    assert!(wallet.load_transaction("tx5").is_some());
}

#[tokio::test]
async fn reload_without_cursor_resets_index() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.push_transactions_page(vec![transfer("old", OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30)], Some("a"));
    node.push_transactions_page(vec![transfer("new", OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30)], Some("b"));

    wallet.load_transactions(None).await.unwrap();
    assert!(wallet.load_transaction("old").is_some());

    wallet.load_transactions(None).await.unwrap();
    assert!(wallet.load_transaction("old").is_none());
    assert!(wallet.load_transaction("new").is_some());
}

#[tokio::test]
async fn empty_page_has_no_cursor() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.push_transactions_page(Vec::new(), Some("ignored"));
    let page = wallet.load_transactions(None).await.unwrap();
    assert!(page.transactions.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.cursor, None);
}

#[tokio::test]
async fn token_history_is_always_final() {
    let config = WalletConfig {
        asset: AssetConfig::Token {
            address: TOKEN.into(),
        },
        txs_per_page: 2,
        ..Default::default()
    };
    let (mut wallet, node) = wallet(config);
    node.push_token_transactions_page(
        vec![
            token_transfer("t1", OTHER, OWN, 2_000_000),
            token_transfer("t2", OWN, OTHER, 500),
        ],
        Some("fp"),
    );
    let page = wallet.load_transactions(None).await.unwrap();
    assert!(page.has_more);
    assert_eq!(node.calls("transactions"), 0);

    let received = &page.transactions[0];
    assert!(received.incoming);
    assert_eq!(received.status, TxStatus::Success);
    assert_eq!(received.fee, None);
    assert_eq!(received.confirmations, 0);
    assert_eq!(received.token_address.as_deref(), Some(TOKEN));
    assert_eq!(received.action, TxAction::TokenTransfer);

    assert_eq!(page.transactions[1].signed_amount(), -500);
    assert_eq!(wallet.load_transaction("t2").map(|e| e.amount), Some(Amount::new(500)));
}

#[tokio::test]
async fn history_errors_are_node_errors() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    node.fail_reads("down");
    assert!(matches!(
        wallet.load_transactions(None).await,
        Err(trx_wallet_core::WalletError::Node(_))
    ));
}

#[tokio::test]
async fn full_page_with_contractless_records_keeps_paging() {
    let (mut wallet, node) = wallet(WalletConfig::default());
    let mut data: Vec<RawTransaction> = (0..3)
        .map(|i| RawTransaction {
            tx_id: format!("bare{i}"),
            raw_data: RawData::default(),
            ret: Vec::new(),
            block_timestamp: 0,
            confirmations: 0,
        })
        .collect();
    data.push(transfer("t1", OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30));
    data.push(transfer("t2", OTHER_HEX, OWN_HEX, 2, Some("SUCCESS"), 30));
    node.push_transactions_page(data, Some("fp1"));

    let page = wallet.load_transactions(None).await.unwrap();
    assert_eq!(page.transactions.len(), 5);
    assert!(page.has_more);
    assert_eq!(page.cursor.as_deref(), Some("fp1"));

    let bare = wallet.load_transaction("bare0").unwrap();
    assert_eq!(bare.from, "");
    assert_eq!(bare.to, "");
    assert_eq!(bare.amount, Amount::ZERO);
    assert_eq!(bare.status, TxStatus::Pending);
}

#[tokio::test]
async fn oversized_page_size_is_clamped_for_request_and_has_more() {
    let config = WalletConfig {
        txs_per_page: 500,
        ..Default::default()
    };
    let (mut wallet, node) = wallet(config);
    let full = (0..200)
        .map(|i| transfer(&format!("tx{i}"), OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30))
        .collect();
    node.push_transactions_page(full, Some("next"));

    let page = wallet.load_transactions(None).await.unwrap();
    assert_eq!(node.page_requests()[0].limit, 200);
    assert!(page.has_more);
}

#[tokio::test]
async fn zero_page_size_requests_one() {
    let config = WalletConfig {
        txs_per_page: 0,
        ..Default::default()
    };
    let (mut wallet, node) = wallet(config);
    node.push_transactions_page(vec![transfer("only", OTHER_HEX, OWN_HEX, 1, Some("SUCCESS"), 30)], Some("n"));

    let page = wallet.load_transactions(None).await.unwrap();
    assert_eq!(node.page_requests()[0].limit, 1);
    assert!(page.has_more);
}
