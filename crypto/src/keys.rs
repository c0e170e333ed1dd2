//! secp256k1 key handling and the lockable key wrapper held by a wallet.

use crate::address::address_from_public_key;
use crate::error::CryptoError;
use crate::hd::{derive_private_key, DerivationPath};
use secp256k1::{Secp256k1, SecretKey};
use trx_types::{Address, PrivateKey, PublicKey};
use zeroize::Zeroize;

/// Compute the uncompressed public key for a private key.
pub fn public_from_private(private: &PrivateKey) -> Result<PublicKey, CryptoError> {
    let secp = Secp256k1::signing_only();
    let secret =
        SecretKey::from_slice(private.as_bytes()).map_err(|e| CryptoError::Derivation(e.to_string()))?;
    Ok(PublicKey(
        secp256k1::PublicKey::from_secret_key(&secp, &secret).serialize_uncompressed(),
    ))
}

/// A wallet's key pair where the private half may be absent.
///
/// The private key is present only while unlocked. `lock` zeroizes it, and its
/// absence is the only signal for the locked state.
pub struct KeyMaterial {
    public: PublicKey,
    address: Address,
    private: Option<PrivateKey>,
}

impl KeyMaterial {
    /// Derive an unlocked key pair from a seed at `path`.
    pub fn from_seed(seed: &[u8], path: &DerivationPath) -> Result<Self, CryptoError> {
        let private = derive_private_key(seed, path)?;
        let public = public_from_private(&private)?;
        let address = address_from_public_key(public.as_bytes())?;
        Ok(Self {
            public,
            address,
            private: Some(private),
        })
    }

    /// A locked key pair holding only the public key.
    pub fn watch_only(public: PublicKey) -> Result<Self, CryptoError> {
        let address = address_from_public_key(public.as_bytes())?;
        Ok(Self {
            public,
            address,
            private: None,
        })
    }

    /// Re-derive the private key from `seed` and keep it if it matches our public key.
    pub fn unlock(&mut self, seed: &[u8], path: &DerivationPath) -> Result<(), CryptoError> {
        let private = derive_private_key(seed, path)?;
        if public_from_private(&private)? != self.public {
            return Err(CryptoError::KeyMismatch);
        }
        self.private = Some(private);
        Ok(())
    }

    /// Zeroize and drop the private key.
    pub fn lock(&mut self) {
        if let Some(mut key) = self.private.take() {
            key.zeroize();
        }
    }

    pub fn is_locked(&self) -> bool {
        self.private.is_none()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn private_key(&self) -> Result<&PrivateKey, CryptoError> {
        self.private.as_ref().ok_or(CryptoError::Locked)
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("address", &self.address)
            .field("locked", &self.is_locked())
            .finish()
    }
}
