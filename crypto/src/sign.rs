//! Recoverable ECDSA over 32-byte digests.
//!
//! Signatures are `r ‖ s ‖ recovery_id` with a deterministic RFC6979 nonce and a
//! low-S normalized `s`.

use crate::error::CryptoError;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1, SecretKey};
use trx_types::{PrivateKey, PublicKey, Signature};

/// Sign a 32-byte digest.
pub fn sign_digest(digest: &[u8; 32], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    let secp = Secp256k1::signing_only();
    let secret = SecretKey::from_slice(private_key.as_bytes())
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    let msg = Message::from_digest(*digest);
    let (recid, compact) = secp
        .sign_ecdsa_recoverable(&msg, &secret)
        .serialize_compact();
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&compact);
    out[64] = recid.to_i32() as u8;
    Ok(Signature(out))
}

/// Recover the signer's public key from a digest and signature.
pub fn recover_public_key(digest: &[u8; 32], signature: &Signature) -> Result<PublicKey, CryptoError> {
    let secp = Secp256k1::verification_only();
    let recid = RecoveryId::from_i32(i32::from(signature.recovery_id()))
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    let sig = RecoverableSignature::from_compact(&signature.as_bytes()[..64], recid)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    let key = secp
        .recover_ecdsa(&Message::from_digest(*digest), &sig)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    Ok(PublicKey(key.serialize_uncompressed()))
}

/// Whether `signature` over `digest` was produced by `public_key`.
pub fn verify_signature(digest: &[u8; 32], signature: &Signature, public_key: &PublicKey) -> bool {
    recover_public_key(digest, signature).is_ok_and(|recovered| recovered == *public_key)
}
