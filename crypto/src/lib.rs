//! Cryptographic primitives for the TRON wallet core.
//!
//! - **secp256k1** recoverable ECDSA for transaction signatures
//! - **Keccak-256** for address derivation
//! - **SHA-256** for transaction ids and Base58Check checksums
//! - BIP32 hardened derivation and BIP39 mnemonics for seed handling

pub mod address;
pub mod error;
pub mod hash;
pub mod hd;
pub mod keys;
pub mod mnemonic;
pub mod sign;

pub use address::{
    address_from_public_key, decode_address, encode_address, from_base58check, is_valid_address,
    random_address, to_base58check,
};
pub use error::CryptoError;
pub use hash::{double_sha256, hash_transaction, keccak256, sha256};
pub use hd::{derive_private_key, parse_derivation_path, DerivationPath, DEFAULT_BIP44_PATH};
pub use keys::{public_from_private, KeyMaterial};
pub use mnemonic::{generate_mnemonic, seed_from_mnemonic, validate_mnemonic};
pub use sign::{recover_public_key, sign_digest, verify_signature};
