//! Authentication module
//!
//! Provides JWT bearer tokens with bcrypt password hashing, plus the
//! request extractor that guards API handlers.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, MissingSecret};
pub use middleware::{bearer_token, AuthUser, BEARER_PREFIX};
pub use password::PasswordService;
