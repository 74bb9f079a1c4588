//! Authentication routes
//!
//! Signup, login, logout and profile lookup. Signup and login attach the
//! `authToken` cookie to their response and return the issued session in
//! the envelope so the client can populate its own store; logout clears
//! the cookie. Each side of that dual persistence is independent.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::session;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use neighborly_shared::response::ApiResponse;
use neighborly_shared::types::{LoginRequest, SignupRequest, UserSummary};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /api/auth/signup
async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let issued =
        UserService::signup(&state.db, state.jwt(), state.passwords(), &request).await?;

    let jar = jar.add(session::auth_cookie(
        issued.token.clone(),
        state.jwt().ttl_secs(),
    ));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::success_with_message(issued, "Account created")),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let issued = UserService::login(&state.db, state.jwt(), state.passwords(), &request).await?;

    let jar = jar.add(session::auth_cookie(
        issued.token.clone(),
        state.jwt().ttl_secs(),
    ));

    Ok((jar, Json(ApiResponse::success(issued))))
}

/// Clear the cookie half of the session
///
/// POST /api/auth/logout
///
/// The client clears its own held store; the issuer keeps no token state,
/// so the token simply ages out.
async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(session::removal_cookie());
    (
        jar,
        Json(ApiResponse::success_with_message(
            serde_json::Value::Null,
            "Logged out",
        )),
    )
}

/// Get current user profile (requires authentication)
///
/// GET /api/auth/me
async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<ApiResponse<UserSummary>>> {
    let profile = UserService::profile(&state.db, auth_user.user_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}
