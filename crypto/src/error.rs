use thiserror::Error;

/// Errors from key handling, address decoding and signing.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("public key must be 65 uncompressed bytes, got {0}")]
    InvalidPublicKey(usize),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("address checksum mismatch")]
    InvalidChecksum,

    #[error("invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("key derivation failed: {0}")]
    Derivation(String),

    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("private key is locked")]
    Locked,

    #[error("derived public key does not match the stored key")]
    KeyMismatch,
}
