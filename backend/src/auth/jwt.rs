//! JWT token generation and validation
//!
//! Tokens are stateless, self-expiring values; the process keeps no
//! per-token state and expiry is the only time-based invalidation.
//! Keys are pre-computed once at startup and cached for the life of
//! the process.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use neighborly_shared::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// The signing secret was absent at startup
///
/// This is a fatal configuration error: the service refuses to start
/// rather than issue tokens it cannot stand behind.
#[derive(Error, Debug)]
#[error("JWT signing secret is not set")]
pub struct MissingSecret;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email at time of issuance
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp), always greater than `iat`
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Design: Uses pre-computed keys to avoid expensive key derivation
/// on every request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    ttl_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    /// Fails when the secret is unset, which aborts startup.
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self, MissingSecret> {
        if secret.is_empty() {
            return Err(MissingSecret);
        }
        Ok(Self {
            keys: JwtKeys::new(secret),
            ttl_secs,
        })
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Failures map onto the fixed reason set; a well-formed token with a
    /// wrong signature is never trusted.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::BadSignature,
                _ => AuthError::MalformedToken,
            })
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret";

    fn create_test_service() -> JwtService {
        JwtService::new(TEST_SECRET, 604_800).unwrap()
    }

    #[test]
    fn test_empty_secret_rejected_at_construction() {
        assert!(JwtService::new("", 3600).is_err());
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id, "jo@test.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "jo@test.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_reports_expired() {
        let service = create_test_service();
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "jo@test.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_wrong_secret_reports_bad_signature() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 3600).unwrap();
        let token = other.issue(Uuid::new_v4(), "jo@test.com").unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::BadSignature);
    }

    #[test]
    fn test_garbage_reports_malformed() {
        let service = create_test_service();
        assert_eq!(
            service.verify("not.a.token").unwrap_err(),
            AuthError::MalformedToken
        );
        assert_eq!(service.verify("").unwrap_err(), AuthError::MalformedToken);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
