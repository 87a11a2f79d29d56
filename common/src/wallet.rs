use std::env;

use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::error::SwapError;

/// Load the signing keypair from `SECRET_KEY` (base58) or fall back to the
/// keypair file at `keypair_path`.
///
/// The key material is owned by the returned `Keypair` and stays inside the
/// process: nothing here (or anywhere else in the crate) logs it or writes it
/// back out.
pub fn load_keypair(keypair_path: &str) -> Result<Keypair, SwapError> {
    if let Ok(secret_b58) = env::var("SECRET_KEY") {
        return keypair_from_base58(&secret_b58);
    }
    if keypair_path.is_empty() {
        return Err(SwapError::Config(
            "set SECRET_KEY or KEYPAIR_PATH to provide a signing key".to_string(),
        ));
    }
    read_keypair_file(keypair_path)
        .map_err(|e| SwapError::SigningFailure(format!("failed to read keypair file: {e}")))
}

/// Decode a base58-encoded 64-byte secret into a keypair.
pub fn keypair_from_base58(secret_b58: &str) -> Result<Keypair, SwapError> {
    let bytes = bs58::decode(secret_b58.trim())
        .into_vec()
        .map_err(|e| SwapError::SigningFailure(format!("secret key is not valid base58: {e}")))?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| SwapError::SigningFailure(format!("secret key bytes are not a keypair: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    #[test]
    fn base58_secret_round_trips() {
        let original = Keypair::new();
        let encoded = bs58::encode(original.to_bytes()).into_string();
        let restored = keypair_from_base58(&encoded).unwrap();
        assert_eq!(original.pubkey(), restored.pubkey());
    }

    #[test]
    fn garbage_secret_is_a_signing_failure() {
        let err = keypair_from_base58("not-base58-0OIl").unwrap_err();
        assert!(matches!(err, SwapError::SigningFailure(_)));
    }

    #[test]
    fn truncated_secret_is_a_signing_failure() {
        let short = bs58::encode([7u8; 16]).into_string();
        let err = keypair_from_base58(&short).unwrap_err();
        assert!(matches!(err, SwapError::SigningFailure(_)));
    }
}
