//! Error types for the Neighborly application

use thiserror::Error;

/// Authentication failure reasons
///
/// These are the only ways a bearer token can fail verification. They are
/// returned as typed results, never thrown across the verifier boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authentication token")]
    MissingToken,

    #[error("Malformed authentication token")]
    MalformedToken,

    #[error("Authentication token expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    BadSignature,
}

/// Session channel storage failure
///
/// Channel writes are best-effort; callers log these rather than propagate.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session channel unavailable: {0}")]
    Unavailable(String),
}
