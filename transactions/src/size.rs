//! Serialized size of a transfer, used to price bandwidth.

use crate::builder::{attach_reference, build_transfer};
use crate::error::TransactionError;
use crate::proto::Transaction;
use prost::Message;
use trx_types::{Address, Amount, AssetKind, LatestBlock};

/// Extra bytes the node charges for the transaction result.
pub const RESULT_RESERVE_BYTES: usize = 64;

const SIGNATURE_LEN: usize = 65;

/// Any realistic block timestamp encodes to a 6-byte varint; this one does too.
const PLACEHOLDER_TIMESTAMP_MS: u64 = 1_700_000_000_000;

/// Estimate the bandwidth a signed transfer will consume.
///
/// Builds the real contract with a placeholder reference block and signature so
/// the result matches the final encoding byte for byte.
pub fn estimate_transfer_size(
    asset: &AssetKind,
    from: &Address,
    to: &str,
    value: Amount,
    fee_limit: u64,
) -> Result<usize, TransactionError> {
    let placeholder = LatestBlock {
        id: [0u8; 32],
        number: 0,
        timestamp: PLACEHOLDER_TIMESTAMP_MS,
    };
    let unsigned = attach_reference(build_transfer(asset, from, to, value)?, &placeholder, fee_limit)?;
    let tx = Transaction {
        raw_data: Some(unsigned.raw().clone()),
        signature: vec![vec![0u8; SIGNATURE_LEN]],
    };
    Ok(tx.encoded_len() + RESULT_RESERVE_BYTES)
}
