//! Password hashing and verification (Argon2, PHC strings).
//!
//! DESIGN
//! ======
//! Stored secrets are Argon2id PHC strings with a random 16-byte salt. The
//! verifier recomputes the digest and relies on the `argon2` crate's
//! constant-time equality — the plaintext is never compared to the stored
//! string directly, and a malformed stored hash verifies as `false` rather
//! than erroring.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use password_hash::{PasswordHash, SaltString};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("salt generation failed: {0}")]
    Salt(String),
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Timing-safe comparison of a plaintext candidate against a stored hash.
///
/// Injected into the credential authorizer so tests can substitute a stub
/// with a fixed answer.
#[async_trait]
pub trait SecretVerifier: Send + Sync {
    /// `true` iff `plaintext` is the password the stored hash was derived
    /// from. Any malformed `stored_hash` yields `false`.
    async fn verify(&self, plaintext: &str, stored_hash: &str) -> bool;
}

/// Production verifier backed by `Argon2::default()`.
pub struct Argon2Verifier;

#[async_trait]
impl SecretVerifier for Argon2Verifier {
    async fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let stored_hash = stored_hash.to_owned();
        // CPU-bound digest; keep it off the async workers.
        match tokio::task::spawn_blocking(move || verify_sync(&plaintext, &stored_hash)).await {
            Ok(matched) => matched,
            Err(_) => false,
        }
    }
}

pub(crate) fn verify_sync(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Hash a plaintext password into an Argon2id PHC string.
///
/// # Errors
///
/// Returns an error if the system RNG or the hasher fails.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| PasswordError::Salt(e.to_string()))?;
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Salt(e.to_string()))?;
    let phc = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?
        .to_string();
    Ok(phc)
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
