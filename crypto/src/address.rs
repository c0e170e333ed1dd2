//! Address derivation and the Base58Check text form.
//!
//! Address = `0x41 ‖ keccak256(pubkey[1..65])[12..32]`.
//! Text form = `base58(address ‖ double_sha256(address)[..4])`, always starting with `T`.

use crate::error::CryptoError;
use crate::hash::{double_sha256, keccak256};
use rand::RngCore;
use trx_types::{Address, PublicKey};

const CHECKSUM_LEN: usize = 4;

/// Derive the address for a 65-byte uncompressed public key.
pub fn address_from_public_key(public_key: &[u8]) -> Result<Address, CryptoError> {
    let key: &[u8; PublicKey::LEN] = public_key
        .try_into()
        .map_err(|_| CryptoError::InvalidPublicKey(public_key.len()))?;
    Ok(address_from_key(key))
}

fn address_from_key(key: &[u8; PublicKey::LEN]) -> Address {
    let hash = keccak256(&key[1..]);
    let mut body = [0u8; 20];
    body.copy_from_slice(&hash[12..]);
    Address::from_body(body)
}

/// Base58Check-encode arbitrary payload bytes.
pub fn to_base58check(payload: &[u8]) -> String {
    let checksum = double_sha256(payload);
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(buf).into_string()
}

/// Decode Base58Check text, verify the checksum and return the payload.
pub fn from_base58check(s: &str) -> Result<Vec<u8>, CryptoError> {
    let mut decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| CryptoError::InvalidAddress(e.to_string()))?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(CryptoError::InvalidAddress(format!(
            "decoded length {} shorter than checksum",
            decoded.len()
        )));
    }
    let split = decoded.len() - CHECKSUM_LEN;
    let checksum = double_sha256(&decoded[..split]);
    if checksum[..CHECKSUM_LEN] != decoded[split..] {
        return Err(CryptoError::InvalidChecksum);
    }
    decoded.truncate(split);
    Ok(decoded)
}

/// Encode an address in its `T...` text form.
pub fn encode_address(address: &Address) -> String {
    to_base58check(address.as_bytes())
}

/// Decode a `T...` string into a prefixed 21-byte address.
pub fn decode_address(s: &str) -> Result<Address, CryptoError> {
    let payload = from_base58check(s)?;
    Address::from_slice(&payload).map_err(|e| CryptoError::InvalidAddress(e.to_string()))
}

/// Whether `s` is a well-formed address with a valid checksum.
pub fn is_valid_address(s: &str) -> bool {
    decode_address(s).is_ok()
}

/// A well-formed address whose key nobody holds.
///
/// Derived from 65 random bytes, so it passes every format check but can never sign.
pub fn random_address() -> Address {
    let mut bytes = [0u8; PublicKey::LEN];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes[0] = 0x04;
    address_from_key(&bytes)
}
