//! RS256 key management for token signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{crypto, Algorithm, DecodingKey, EncodingKey};
use sigil_shared::KeyConfig;
use tracing::{error, info};

use crate::errors::TokenError;

/// Message signed during the load-time self-test
const SELF_TEST_MESSAGE: &[u8] = b"sigil key pair self-test";

/// Manager for the RS256 key pair used by the token engine
///
/// Built once at startup and never re-read; clones share nothing mutable.
#[derive(Clone)]
pub struct Rs256KeyManager {
    /// Private key for signing tokens
    encoding_key: EncodingKey,
    /// Public key for verifying tokens
    decoding_key: DecodingKey,
    /// Path to private key file
    private_key_path: PathBuf,
    /// Path to public key file
    public_key_path: PathBuf,
}

impl std::fmt::Debug for Rs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256KeyManager")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .finish()
    }
}

impl Rs256KeyManager {
    /// Loads the key pair from PEM files
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded RSA private key
    /// * `public_key_path` - Path to the PEM-encoded RSA public key
    ///
    /// # Returns
    ///
    /// * `Ok(Rs256KeyManager)` - Both keys loaded and the pair matches
    /// * `Err(TokenError::KeyLoadFailure)` - Missing file, unreadable file,
    ///   malformed PEM, non-RSA key, or mismatched pair
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sigil_core::services::token::Rs256KeyManager;
    ///
    /// let key_manager = Rs256KeyManager::new(
    ///     "keys/private_key.pem",
    ///     "keys/public_key.pem",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn new<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, TokenError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = read_pem(&private_key_path, "private")?;
        let public_key_pem = read_pem(&public_key_path, "public")?;

        let manager = Self::from_pem_bytes(&private_key_pem, &public_key_pem)?;

        info!(
            "Loaded RS256 key pair (private: {}, public: {})",
            private_key_path.display(),
            public_key_path.display()
        );

        Ok(Self {
            private_key_path,
            public_key_path,
            ..manager
        })
    }

    /// Loads the key pair from the configured paths
    pub fn from_config(config: &KeyConfig) -> Result<Self, TokenError> {
        Self::new(&config.private_key_path, &config.public_key_path)
    }

    /// Creates a key manager from PEM strings (useful for testing or embedded keys)
    pub fn from_pem_strings(
        private_key_pem: &str,
        public_key_pem: &str,
    ) -> Result<Self, TokenError> {
        Self::from_pem_bytes(private_key_pem.as_bytes(), public_key_pem.as_bytes())
    }

    fn from_pem_bytes(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, TokenError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| key_load_failure(format!("Invalid private key format: {}", e)))?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| key_load_failure(format!("Invalid public key format: {}", e)))?;

        let manager = Self {
            encoding_key,
            decoding_key,
            private_key_path: PathBuf::from("memory"),
            public_key_path: PathBuf::from("memory"),
        };
        manager.self_test()?;

        Ok(manager)
    }

    /// Signs and verifies a fixed message with the loaded pair
    ///
    /// Catches a public key that does not belong to the private key, and
    /// private keys that parse but cannot sign.
    fn self_test(&self) -> Result<(), TokenError> {
        let signature = crypto::sign(SELF_TEST_MESSAGE, &self.encoding_key, Algorithm::RS256)
            .map_err(|e| key_load_failure(format!("Private key cannot sign: {}", e)))?;

        match crypto::verify(&signature, SELF_TEST_MESSAGE, &self.decoding_key, Algorithm::RS256) {
            Ok(true) => Ok(()),
            Ok(false) => Err(key_load_failure("Public key does not match private key".to_string())),
            Err(e) => Err(key_load_failure(format!("Public key cannot verify: {}", e))),
        }
    }

    /// Returns the encoding key for signing tokens
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying tokens
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the paths to the key files
    pub fn key_paths(&self) -> (&Path, &Path) {
        (&self.private_key_path, &self.public_key_path)
    }
}

fn read_pem(path: &Path, which: &str) -> Result<Vec<u8>, TokenError> {
    fs::read(path).map_err(|e| {
        error!("Failed to read {} key at {}: {}", which, path.display(), e);
        key_load_failure(format!("Failed to read {} key {}: {}", which, path.display(), e))
    })
}

fn key_load_failure(message: String) -> TokenError {
    TokenError::KeyLoadFailure { message }
}
