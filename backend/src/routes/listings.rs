//! Listing routes
//!
//! Creation is a state-changing action, so it sits behind full token
//! verification regardless of what the edge gate let through.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::ListingRepository;
use crate::state::AppState;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use neighborly_shared::response::ApiResponse;
use neighborly_shared::types::NewListingRequest;
use neighborly_shared::validation::validate_new_listing;

/// Create listing routes
pub fn listing_routes() -> Router<AppState> {
    Router::new().route("/", post(create_listing))
}

/// Create a new listing
///
/// POST /api/listings
async fn create_listing(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<NewListingRequest>,
) -> ApiResult<impl IntoResponse> {
    let valid = validate_new_listing(&request).map_err(ApiError::Validation)?;

    let record = ListingRepository::create(&state.db, auth_user.user_id, &valid).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            record.into_response(),
            "Listing created",
        )),
    ))
}
