//! Route definitions for the Neighborly API
//!
//! This module organizes all API routes and applies middleware. The route
//! gate wraps the whole router so page navigations are filtered at the
//! edge before any handler runs.

use crate::error::ApiError;
use crate::gate;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod health;
mod listings;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod envelope_tests;

pub use auth::auth_routes;
pub use listings::listing_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        .fallback(not_found)
        // Apply middleware layers
        .layer(middleware::from_fn_with_state(state.clone(), gate::route_gate))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::auth_routes())
        .nest("/listings", listings::listing_routes())
}

/// Unmatched paths get the envelope, not a bare 404
async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}
