//! Errors raised while constructing core types from untrusted input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("address must be 21 bytes, got {0}")]
    InvalidAddressLength(usize),

    #[error("unexpected address prefix 0x{0:02x}")]
    InvalidAddressPrefix(u8),

    #[error("public key must be 65 bytes, got {0}")]
    InvalidPublicKeyLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
