//! BIP39 mnemonic helpers for producing the seed a wallet is created from.

use crate::error::CryptoError;
use bip39::Mnemonic;
use rand::RngCore;

/// Generate a new 24-word mnemonic from 256 bits of OS entropy.
pub fn generate_mnemonic() -> Result<String, CryptoError> {
    let mut entropy = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let mnemonic =
        Mnemonic::from_entropy(&entropy).map_err(|e| CryptoError::Derivation(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Whether the phrase is a valid BIP39 mnemonic.
pub fn validate_mnemonic(mnemonic: &str) -> bool {
    Mnemonic::parse_normalized(mnemonic).is_ok()
}

/// PBKDF2 seed for a mnemonic and optional passphrase.
pub fn seed_from_mnemonic(mnemonic: &str, passphrase: &str) -> Result<[u8; 64], CryptoError> {
    let mnemonic = Mnemonic::parse_normalized(mnemonic)
        .map_err(|e| CryptoError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_seed_normalized(passphrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_mnemonic_is_valid() {
        let phrase = generate_mnemonic().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 24);
        assert!(validate_mnemonic(&phrase));
    }

    #[test]
    fn invalid_mnemonic_rejected() {
        assert!(!validate_mnemonic("not a real mnemonic"));
        assert!(matches!(
            seed_from_mnemonic("not a real mnemonic", ""),
            Err(CryptoError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn bip39_reference_vector() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let seed = seed_from_mnemonic(phrase, "TREZOR").unwrap();
        assert_eq!(
            hex::encode(seed),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn passphrase_changes_seed() {
        let phrase = generate_mnemonic().unwrap();
        assert_ne!(
            seed_from_mnemonic(&phrase, "").unwrap(),
            seed_from_mnemonic(&phrase, "extra").unwrap()
        );
    }
}
