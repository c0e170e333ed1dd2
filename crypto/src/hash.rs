//! Hash functions used by addresses and transactions.

use sha2::{Digest, Sha256};
use sha3::Keccak256;
use trx_types::TxId;

/// SHA-256 of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// SHA-256 applied twice, as used by Base58Check.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Legacy Keccak-256 (not NIST SHA3-256).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Keccak256::digest(data));
    output
}

/// The transaction id: SHA-256 of the encoded raw data.
pub fn hash_transaction(raw_data: &[u8]) -> TxId {
    TxId::new(sha256(raw_data))
}
