//! Authentication middleware
//!
//! Bearer extraction plus the Axum extractor that performs full token
//! verification at the API boundary. Extraction failures and verification
//! failures both surface as the 401 envelope with a stable reason message.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use neighborly_shared::errors::AuthError;
use uuid::Uuid;

/// Exact scheme prefix required in the authorization header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of the request headers
///
/// The prefix match is case-sensitive; a missing header, a differently
/// cased scheme or any other malformed value yields `None`, not an error.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Authenticated user extracted from a verified JWT
///
/// This extractor composes bearer extraction with full signature and
/// expiry verification, using the pre-computed keys from AppState.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;

        let claims = app_state.jwt().verify(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(bearer_token(&headers_with_auth("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with_auth("BEARER abc")), None);
    }

    #[test]
    fn test_other_schemes_yield_none() {
        assert_eq!(bearer_token(&headers_with_auth("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with_auth("Bearer")), None);
        assert_eq!(bearer_token(&headers_with_auth("abc.def.ghi")), None);
    }
}
