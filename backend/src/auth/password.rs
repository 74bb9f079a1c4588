//! Password hashing using bcrypt
//!
//! One-way adaptive hashing with a fixed work factor taken from process
//! configuration; the cost is never derived from request data.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. In async contexts use the
//! `*_async` variants, which run on the blocking thread pool.

use anyhow::Result;

/// Password hashing service
///
/// Constructed once at startup with the configured cost factor and shared
/// through AppState.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Verify a password against a hash (blocking operation)
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Failed to verify password: {}", e))
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the test suite fast; production uses the
    // configured factor.
    fn test_service() -> PasswordService {
        // bcrypt::MIN_COST is private; 4 is its value (the minimum cost).
        PasswordService::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let service = test_service();
        let password = "Secure!Password123";
        let hash = service.hash(password).unwrap();

        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("Wrong!Password123", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let service = test_service();
        let password = "Test!Password1";
        let hash1 = service.hash(password).unwrap();
        let hash2 = service.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(service.verify(password, &hash1).unwrap());
        assert!(service.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_hash_of_other_password_never_verifies() {
        let service = test_service();
        let hash_q = service.hash("Other!Password2").unwrap();
        assert!(!service.verify("Some!Password1", &hash_q).unwrap());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let service = test_service();
        let password = "Async!Password1".to_string();
        let hash = service.hash_async(password.clone()).await.unwrap();

        assert!(service
            .verify_async(password.clone(), hash.clone())
            .await
            .unwrap());
        assert!(!service
            .verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
