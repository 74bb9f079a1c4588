//! Server half of the session cookie channel
//!
//! Builds the `authToken` cookie that signup and login attach to their
//! responses, and its expired twin used by logout. The cookie is the only
//! session channel the server ever reads; the client-held channel is
//! invisible from here by design.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name, shared with the client session store
pub const AUTH_COOKIE: &str = neighborly_shared::session::TOKEN_KEY;

/// Build the auth cookie for a freshly issued token
///
/// Attributes: path `/`, `SameSite=Strict`, expiry = issuance + the token
/// lifetime (7 days by default).
pub fn auth_cookie(token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build the removal cookie that clears the auth cookie
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE, "");
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Strict);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie("token-123".to_string(), 604_800);
        let rendered = cookie.to_string();

        assert!(rendered.starts_with("authToken=token-123"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("SameSite=Strict"));
        assert!(rendered.contains("Max-Age=604800"));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie();

        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
