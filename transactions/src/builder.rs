//! Build, anchor and sign transfer transactions.

use crate::error::TransactionError;
use crate::proto::{Any, Contract, ContractType, Transaction, TransactionRaw, TransferContract, TriggerSmartContract};
use crate::trc20::encode_transfer_call;
use prost::Message;
use trx_crypto::{decode_address, hash_transaction, sign_digest, KeyMaterial};
use trx_types::{Address, Amount, AssetKind, LatestBlock, Signature, TxId};

/// A transaction that has not been signed yet.
#[derive(Clone, Debug, PartialEq)]
pub struct UnsignedTransaction {
    raw: TransactionRaw,
}

impl UnsignedTransaction {
    pub fn raw(&self) -> &TransactionRaw {
        &self.raw
    }

    /// Canonical encoding of the raw data; this is what gets hashed and signed.
    pub fn raw_data_bytes(&self) -> Vec<u8> {
        self.raw.encode_to_vec()
    }

    pub fn txid(&self) -> TxId {
        hash_transaction(&self.raw_data_bytes())
    }

    pub fn fee_limit(&self) -> i64 {
        self.raw.fee_limit
    }

    pub fn expiration(&self) -> i64 {
        self.raw.expiration
    }
}

/// A signed transaction ready for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedTransaction {
    transaction: Transaction,
    txid: TxId,
    signature: Signature,
}

impl SignedTransaction {
    pub fn txid(&self) -> TxId {
        self.txid
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.transaction.encode_to_vec()
    }

    /// Hex form accepted by the node's submit endpoint.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

fn parse_destination(to: &str) -> Result<Address, TransactionError> {
    decode_address(to).map_err(|e| TransactionError::InvalidAddress(format!("{to}: {e}")))
}

fn to_i64(value: u128) -> Result<i64, TransactionError> {
    i64::try_from(value).map_err(|_| TransactionError::AmountOutOfRange(value))
}

/// Build the contract for sending `value` of `asset` from `from` to the `T...` address `to`.
///
/// A malformed destination fails here, before any reference block is fetched.
pub fn build_transfer(
    asset: &AssetKind,
    from: &Address,
    to: &str,
    value: Amount,
) -> Result<UnsignedTransaction, TransactionError> {
    let to = parse_destination(to)?;
    let (kind, value_bytes) = match asset {
        AssetKind::Coin => {
            let contract = TransferContract {
                owner_address: from.as_bytes().to_vec(),
                to_address: to.as_bytes().to_vec(),
                amount: to_i64(value.raw())?,
            };
            (ContractType::TransferContract, contract.encode_to_vec())
        }
        AssetKind::Token { contract } => {
            let call = TriggerSmartContract {
                owner_address: from.as_bytes().to_vec(),
                contract_address: contract.as_bytes().to_vec(),
                data: encode_transfer_call(&to, value),
                ..Default::default()
            };
            (ContractType::TriggerSmartContract, call.encode_to_vec())
        }
    };

    let raw = TransactionRaw {
        contract: vec![Contract {
            r#type: kind as i32,
            parameter: Some(Any {
                type_url: kind.type_url(),
                value: value_bytes,
            }),
        }],
        ..Default::default()
    };
    Ok(UnsignedTransaction { raw })
}

/// Anchor the transaction to `block`, set its expiration and declared fee limit.
pub fn attach_reference(
    mut tx: UnsignedTransaction,
    block: &LatestBlock,
    fee_limit: u64,
) -> Result<UnsignedTransaction, TransactionError> {
    tx.raw.ref_block_bytes = block.ref_block_bytes().to_vec();
    tx.raw.ref_block_hash = block.ref_block_hash().to_vec();
    tx.raw.expiration = to_i64(u128::from(block.expiration()))?;
    tx.raw.fee_limit = to_i64(u128::from(fee_limit))?;
    Ok(tx)
}

/// Sign the raw data with the wallet key.
pub fn sign(tx: UnsignedTransaction, keys: &KeyMaterial) -> Result<SignedTransaction, TransactionError> {
    let private = keys
        .private_key()
        .map_err(|e| TransactionError::Signing(e.to_string()))?;
    let txid = tx.txid();
    let signature =
        sign_digest(txid.as_bytes(), private).map_err(|e| TransactionError::Signing(e.to_string()))?;
    tracing::debug!(%txid, "signed transaction");
    Ok(SignedTransaction {
        transaction: Transaction {
            raw_data: Some(tx.raw),
            signature: vec![signature.as_bytes().to_vec()],
        },
        txid,
        signature,
    })
}
