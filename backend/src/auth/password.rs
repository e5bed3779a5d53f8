//! Password hashing using bcrypt
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Request handlers must use the
//! `_async` variants, which run on the blocking thread pool.

use anyhow::Result;
use rahi_shared::validation::MAX_PASSWORD_BYTES;
use tracing::debug;

/// Password hashing service
///
/// The work factor is fixed at construction. Verification reads the cost
/// from the stored hash, so hashes made with an older cost keep verifying.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Well-formed hash at this cost that no password matches
    ///
    /// Verifying against it costs as much as a real check, so a lookup miss
    /// takes as long as a wrong password.
    pub fn placeholder_hash(&self) -> String {
        format!("$2b${:02}${}", self.cost, ".".repeat(53))
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// A stored hash that cannot be parsed never matches. bcrypt truncates
    /// its input at 72 bytes, so longer passwords and passwords containing
    /// NUL are rejected before hashing.
    pub fn verify(password: &str, hash: &str) -> bool {
        if password.len() > MAX_PASSWORD_BYTES || password.contains('\0') {
            return false;
        }

        bcrypt::verify(password, hash).unwrap_or_else(|e| {
            debug!(error = %e, "Stored password hash is unusable");
            false
        })
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast
    fn service() -> PasswordService {
        PasswordService::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = service().hash("secret123").unwrap();

        assert!(hash.starts_with("$2"));
        assert_ne!(hash, "secret123");
        assert!(PasswordService::verify("secret123", &hash));
        assert!(!PasswordService::verify("wrong", &hash));
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hash1 = service().hash("test_password").unwrap();
        let hash2 = service().hash("test_password").unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);
        assert!(PasswordService::verify("test_password", &hash1));
        assert!(PasswordService::verify("test_password", &hash2));
    }

    #[test]
    fn test_corrupt_hash_never_matches() {
        assert!(!PasswordService::verify("secret123", "not-a-bcrypt-hash"));
        assert!(!PasswordService::verify("", ""));
    }

    #[test]
    fn test_input_past_72_bytes_is_not_ignored() {
        let stored = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = service().hash(&stored).unwrap();

        assert!(PasswordService::verify(&stored, &hash));
        assert!(!PasswordService::verify(&format!("{}WRONG-SUFFIX", stored), &hash));
        assert!(!PasswordService::verify(&format!("{}b", stored), &hash));
    }

    #[test]
    fn test_trailing_nul_rejected() {
        let stored = "a".repeat(MAX_PASSWORD_BYTES - 1);
        let hash = service().hash(&stored).unwrap();

        assert!(PasswordService::verify(&stored, &hash));
        assert!(!PasswordService::verify(&format!("{}\0", stored), &hash));
    }

    #[test]
    fn test_placeholder_hash_parses_and_never_matches() {
        let placeholder = service().placeholder_hash();

        assert_eq!(placeholder.len(), 60);
        assert!(placeholder.starts_with("$2b$04$"));
        assert!(matches!(bcrypt::verify("secret123", &placeholder), Ok(false)));
        assert!(matches!(bcrypt::verify("", &placeholder), Ok(false)));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        assert!(PasswordService::new(2).hash("secret123").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let hash = service().hash_async("async_password".to_string()).await.unwrap();

        assert!(PasswordService::verify_async("async_password".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
