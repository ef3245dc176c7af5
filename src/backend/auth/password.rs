/*!
 * Password Hashing
 *
 * bcrypt hashing and verification. bcrypt is deliberately slow, so both
 * operations run on tokio's blocking thread pool instead of an executor
 * thread.
 *
 * A failed verification (`Ok(false)`) and a hashing failure (`Err`) are kept
 * apart: the first becomes "incorrect credentials", the second a 500.
 */

use thiserror::Error;

/// Errors raised while hashing or verifying
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input (e.g. a malformed stored hash)
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Fixed salt for [`PasswordHasher::verify_unknown`]; the result is discarded
const UNKNOWN_USER_SALT: [u8; 16] = *b"no-such-account!";

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Work factor used unless configured otherwise
    pub const DEFAULT_COST: u32 = 10;

    /// Create a hasher
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor (4..=31, validated at config load)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
        Ok(hashed)
    }

    /// Check a plaintext candidate against a stored hash
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await??;
        Ok(valid)
    }

    /// Stand-in for [`verify`](Self::verify) when there is no stored hash
    ///
    /// Spends one bcrypt derivation at the configured cost, the same work a
    /// real verification does, and always reports a mismatch. Login uses it
    /// for unknown emails so both failures take about as long.
    pub async fn verify_unknown(&self, plaintext: &str) -> Result<bool, PasswordError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::hash_with_salt(plaintext, cost, UNKNOWN_USER_SALT))
            .await??;
        Ok(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}
