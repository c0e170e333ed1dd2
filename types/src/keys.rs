//! Key and signature containers.
//!
//! These types are plain data; derivation and signing live in `trx-crypto`.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 65-byte uncompressed secp256k1 public key (`0x04 ‖ X ‖ Y`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 65]);

impl PublicKey {
    pub const LEN: usize = 65;

    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypesError> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| TypesError::InvalidPublicKeyLength(bytes.len()))
    }

    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A 32-byte secp256k1 secret key.
///
/// Does not implement `Debug`, `Serialize`, or `Clone`. Bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

impl PrivateKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// A 65-byte recoverable signature: `r ‖ s ‖ recovery_id`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 65]);

impl Signature {
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    pub fn recovery_id(&self) -> u8 {
        self.0[64]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}..)", hex::encode(&self.0[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBKEY: &str = "042a8c26a5b8a90ee32bb6ee88ea653dec6bb61ace5c53a70f09405b6cf3181b1773a3b50117e3669caffdf6b4792edd5be4a59af84f3f995e3b446d360048a695";

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = PublicKey::from_hex(PUBKEY).unwrap();
        assert_eq!(pk.to_hex(), PUBKEY);
        let json = serde_json::to_string(&pk).unwrap();
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn public_key_rejects_compressed() {
        let err = PublicKey::from_slice(&[2u8; 33]).unwrap_err();
        assert!(matches!(err, TypesError::InvalidPublicKeyLength(33)));
    }

    #[test]
    fn private_key_zeroize() {
        let mut key = PrivateKey([9u8; 32]);
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; 32]);
    }
}
