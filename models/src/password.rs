// models/src/password.rs
//! Salted password digests stored on patient records.
//!
//! Plaintext passwords are never persisted: enrollment derives a salted
//! SHA-256 digest and verification compares digests in constant time.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::ValidationError;

const SALT_LEN: usize = 16;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    /// Base64-encoded random salt, generated at enrollment.
    pub salt: String,
    /// Base64-encoded SHA-256 digest of salt || password.
    pub digest: String,
}

impl PasswordHash {
    /// Derives a new salted digest from a plaintext password.
    pub fn derive(password: &str) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::PasswordHashingFailed);
        }
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        Ok(Self {
            salt: BASE64.encode(salt),
            digest: BASE64.encode(Self::digest_with(&salt, password)),
        })
    }

    /// Constant-time check of a candidate password against the stored digest.
    /// Malformed stored material verifies as false rather than erroring, so
    /// the caller's control flow stays uniform across failure causes.
    pub fn verify(&self, candidate: &str) -> bool {
        let salt = match BASE64.decode(&self.salt) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let stored = match BASE64.decode(&self.digest) {
            Ok(d) => d,
            Err(_) => return false,
        };
        let computed = Self::digest_with(&salt, candidate);
        stored.ct_eq(computed.as_slice()).into()
    }

    fn digest_with(salt: &[u8], password: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }
}
