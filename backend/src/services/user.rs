//! User service for signup, login and profile lookup
//!
//! Password hashing and verification run on the blocking thread pool;
//! the JWT service arrives by reference with its keys pre-computed.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUserError, UserRepository};
use neighborly_shared::types::{AuthSession, LoginRequest, SignupRequest, UserSummary};
use neighborly_shared::validation::{validate_login, validate_signup};
use sqlx::PgPool;
use uuid::Uuid;

/// The one login failure message
///
/// Identical wording and status whether the email exists or the password
/// is wrong, so responses cannot be used to enumerate accounts.
pub const LOGIN_FAILED: &str = "Invalid email or password";

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue their first session
    ///
    /// Duplicate identity is detected solely through the store's unique
    /// constraint; two concurrent signups on the same email resolve to one
    /// winner and one conflict.
    pub async fn signup(
        pool: &PgPool,
        jwt: &JwtService,
        passwords: &PasswordService,
        request: &SignupRequest,
    ) -> Result<AuthSession, ApiError> {
        let valid = validate_signup(request).map_err(ApiError::Validation)?;

        let password_hash = passwords
            .hash_async(valid.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &valid.email, &password_hash, &valid.name)
            .await
            .map_err(|error| match error {
                CreateUserError::DuplicateEmail => {
                    ApiError::Conflict("Email already registered".to_string())
                }
                CreateUserError::Database(db) => ApiError::Database(db),
            })?;

        let token = jwt.issue(user.id, &user.email).map_err(ApiError::Internal)?;

        Ok(AuthSession {
            token,
            user: user.summary(),
        })
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        passwords: &PasswordService,
        request: &LoginRequest,
    ) -> Result<AuthSession, ApiError> {
        let valid = validate_login(request).map_err(ApiError::Validation)?;

        let user = UserRepository::find_by_email(pool, &valid.email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(LOGIN_FAILED.to_string()))?;

        let matches = passwords
            .verify_async(valid.password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !matches {
            return Err(ApiError::Unauthorized(LOGIN_FAILED.to_string()));
        }

        let token = jwt.issue(user.id, &user.email).map_err(ApiError::Internal)?;

        Ok(AuthSession {
            token,
            user: user.summary(),
        })
    }

    /// Look up the profile behind a verified token subject
    pub async fn profile(pool: &PgPool, user_id: Uuid) -> Result<UserSummary, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(user.summary())
    }
}
