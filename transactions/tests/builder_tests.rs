//! End-to-end checks against transactions accepted by the network.

use prost::Message;
use trx_crypto::{parse_derivation_path, verify_signature, KeyMaterial, DEFAULT_BIP44_PATH};
use trx_transactions::proto::{Transaction, TransferContract};
use trx_transactions::{attach_reference, build_transfer, sign, TransactionError};
use trx_types::{Address, Amount, AssetKind, LatestBlock};

// ── Helpers ─────────────────────────────────────────────────────────────

const SEED: &str = "3e818cec5efc7505369fae3f162af61130b673fa9b40e5955d5cde22a85afa03748d074356a281a5fc1dbd0b721357c56095a54de8d4bc6ecaa288f300776ae4";
const DESTINATION: &str = "TCN3Kpdp9FTE244dnDu5jGSxsPSYuDzh6o";

const COIN_RAW: &str = "0a0260a822089eb14248ba1a9c5c40808ef1c892305a67080112630a2d747970652e676f6f676c65617069732e636f6d2f70726f746f636f6c2e5472616e73666572436f6e747261637412320a154174a02d09dc08f660d2b62a1db6a1663b02a8c2371215411a41bdbc52411415d212afe9efc63cf6b8abb4171880897a9001e09143";
const COIN_TXID: &str = "09e8355bf0dc918a81ad3e79002913a5dbb912cc28ff507733a90a278f0e2f20";
const COIN_R: &str = "65f339721ca614d432687fbbe55d6f4b4e12a9ef82b19790373fab9d29f17229";

const TOKEN_RAW: &str = "0a0260a822089eb14248ba1a9c5c40808ef1c892305aae01081f12a9010a31747970652e676f6f676c65617069732e636f6d2f70726f746f636f6c2e54726967676572536d617274436f6e747261637412740a154174a02d09dc08f660d2b62a1db6a1663b02a8c237121541a614f803b6fd780986a42c78ec9c7f77e6ded13c2244a9059cbb0000000000000000000000001a41bdbc52411415d212afe9efc63cf6b8abb41700000000000000000000000000000000000000000000000000000000001e84809001e886d705";
const TOKEN_TXID: &str = "045aacb031e36a9e665c3aa2baf09841a2d207436c95793de66a32ad28caa223";
const TOKEN_R: &str = "831d562e9dbd83c9805b16df85f5a7a8a920b49486eefead4700cdbd99ba3063";

fn keys() -> KeyMaterial {
    KeyMaterial::from_seed(&hex::decode(SEED).unwrap(), &parse_derivation_path(DEFAULT_BIP44_PATH).unwrap()).unwrap()
}

fn block() -> LatestBlock {
    let mut id = [0u8; 32];
    hex::decode_to_slice(
        "00000000019a60a89eb14248ba1a9c5c2cb4b6a21f769f4ae6b75ba19607e76a",
        &mut id,
    )
    .unwrap();
    LatestBlock {
        id,
        number: 26_894_504,
        timestamp: 1_654_251_828_000,
    }
}

fn token() -> AssetKind {
    AssetKind::Token {
        contract: Address::from_hex("41a614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────

#[test]
fn coin_transfer_matches_reference_encoding() {
    let keys = keys();
    let tx = build_transfer(&AssetKind::Coin, keys.address(), DESTINATION, Amount::new(2_000_000)).unwrap();
    let tx = attach_reference(tx, &block(), 1_100_000).unwrap();
    assert_eq!(hex::encode(tx.raw_data_bytes()), COIN_RAW);
    assert_eq!(tx.txid().to_string(), COIN_TXID);

    let signed = sign(tx, &keys).unwrap();
    let hex = signed.to_hex();
    assert!(hex.starts_with(&format!("0a8301{COIN_RAW}1241{COIN_R}")));
    assert_eq!(signed.to_bytes().len(), 201);
    assert!(verify_signature(signed.txid().as_bytes(), signed.signature(), keys.public_key()));
}

#[test]
fn token_transfer_matches_reference_encoding() {
    let keys = keys();
    let tx = build_transfer(&token(), keys.address(), DESTINATION, Amount::new(2_000_000)).unwrap();
    let tx = attach_reference(tx, &block(), 11_912_040).unwrap();
    assert_eq!(hex::encode(tx.raw_data_bytes()), TOKEN_RAW);
    assert_eq!(tx.txid().to_string(), TOKEN_TXID);

    let signed = sign(tx, &keys).unwrap();
    assert!(signed.to_hex().starts_with(&format!("0acc01{TOKEN_RAW}1241{TOKEN_R}")));
    assert!(verify_signature(signed.txid().as_bytes(), signed.signature(), keys.public_key()));
}

#[test]
fn signed_bytes_decode_back() {
    let keys = keys();
    let tx = build_transfer(&AssetKind::Coin, keys.address(), DESTINATION, Amount::new(7)).unwrap();
    let signed = sign(attach_reference(tx, &block(), 1_100_000).unwrap(), &keys).unwrap();

    let decoded = Transaction::decode(signed.to_bytes().as_slice()).unwrap();
    let raw = decoded.raw_data.unwrap();
    let param = raw.contract[0].parameter.as_ref().unwrap();
    let transfer = TransferContract::decode(param.value.as_slice()).unwrap();
    assert_eq!(transfer.amount, 7);
    assert_eq!(transfer.owner_address, keys.address().as_bytes().to_vec());
    assert_eq!(decoded.signature.len(), 1);
    assert_eq!(decoded.signature[0].len(), 65);
}

#[test]
fn locked_keys_cannot_sign() {
    let mut keys = keys();
    keys.lock();
    let tx = build_transfer(&AssetKind::Coin, keys.address(), DESTINATION, Amount::new(1)).unwrap();
    let tx = attach_reference(tx, &block(), 0).unwrap();
    assert!(matches!(sign(tx, &keys), Err(TransactionError::Signing(_))));
}

#[test]
fn expiration_is_five_minutes_after_block() {
    let keys = keys();
    let tx = build_transfer(&AssetKind::Coin, keys.address(), DESTINATION, Amount::new(1)).unwrap();
    let tx = attach_reference(tx, &block(), 0).unwrap();
    assert_eq!(tx.expiration(), 1_654_251_828_000 + 300_000);
    assert_eq!(tx.fee_limit(), 0);
}
