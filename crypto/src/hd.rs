//! BIP32 key derivation from a BIP39 seed.
//!
//! Only private derivation is needed: the wallet derives one key at a fixed path
//! and never exposes extended keys.

use crate::error::CryptoError;
use bip32::XPrv;
use trx_types::PrivateKey;

pub use bip32::DerivationPath;

/// Default account path for TRON (coin type 195).
pub const DEFAULT_BIP44_PATH: &str = "m/44'/195'/0'";

/// Parse a path such as `m/44'/195'/0'`.
pub fn parse_derivation_path(s: &str) -> Result<DerivationPath, CryptoError> {
    s.trim()
        .parse()
        .map_err(|e| CryptoError::InvalidDerivationPath(format!("{s}: {e}")))
}

/// Derive the private key at `path` from a BIP39 seed.
pub fn derive_private_key(seed: &[u8], path: &DerivationPath) -> Result<PrivateKey, CryptoError> {
    let xprv = XPrv::derive_from_path(seed, path).map_err(|e| CryptoError::Derivation(e.to_string()))?;
    Ok(PrivateKey(xprv.to_bytes()))
}
