//! Raw 21-byte TRON address.
//!
//! The Base58Check text form lives in `trx-crypto`, which owns the hash functions.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 21-byte address: the network prefix byte followed by 20 bytes of key hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; Address::LEN]);

impl Address {
    pub const LEN: usize = 21;

    /// Network prefix byte of every mainnet and testnet address.
    pub const PREFIX: u8 = 0x41;

    /// Build an address from a 20-byte hash body, prepending the prefix.
    pub fn from_body(body: [u8; 20]) -> Self {
        let mut bytes = [0u8; Self::LEN];
        bytes[0] = Self::PREFIX;
        bytes[1..].copy_from_slice(&body);
        Self(bytes)
    }

    /// Validate length and prefix of raw address bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypesError> {
        let arr: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| TypesError::InvalidAddressLength(bytes.len()))?;
        if arr[0] != Self::PREFIX {
            return Err(TypesError::InvalidAddressPrefix(arr[0]));
        }
        Ok(Self(arr))
    }

    /// Parse the `41...` hex form used by node JSON payloads.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s.trim_start_matches("0x"))
            .map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// The 20 bytes after the prefix, as used in EVM-style call data.
    pub fn body(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
