//! User repository for database operations

use chrono::{DateTime, Utc};
use neighborly_shared::types::UserSummary;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Public view, safe to return to clients
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Failure modes of user creation
///
/// A duplicate email is a distinguishable signal so two concurrent signups
/// racing on the same address resolve through the constraint, with exactly
/// one winner.
#[derive(Error, Debug)]
pub enum CreateUserError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for CreateUserError {
    fn from(error: sqlx::Error) -> Self {
        let duplicate = error
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);
        if duplicate {
            Self::DuplicateEmail
        } else {
            Self::Database(error)
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    ///
    /// Relies on the unique index over email; the caller receives
    /// `DuplicateEmail` when the constraint fires.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<UserRecord, CreateUserError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by normalized email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_password_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: "jo@test.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            name: "Jo Smith".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let summary = record.summary();
        assert_eq!(summary.email, "jo@test.com");
        let serialized = serde_json::to_string(&summary).unwrap();
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("$2b$"));
    }

    // Creation and duplicate-key behavior are covered by the
    // database-backed integration tests.
}
