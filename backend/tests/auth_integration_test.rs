//! Integration tests for the signup/login/profile flow
//!
//! These need a running Postgres (TEST_DATABASE_URL); they are ignored by
//! default and run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::TestApp;

fn signup_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Jo Smith",
        "email": email,
        "password": "Str0ng!pass"
    })
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_signup_then_login_round_trip() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let (status, body) = app
        .post("/api/auth/signup", &signup_payload("Jo@Test.com "), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    // Email is stored normalized
    assert_eq!(body["data"]["user"]["email"], "jo@test.com");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // The token from signup works against the API boundary
    let (status, body) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "jo@test.com");

    // Login with the normalized form of the same address
    let (status, body) = app
        .post(
            "/api/auth/login",
            &serde_json::json!({"email": "jo@test.com", "password": "Str0ng!pass"}),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["token"].is_string());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_duplicate_signup_conflicts() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let (status, _) = app
        .post("/api/auth/signup", &signup_payload("dup@test.com"), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same address again, differently cased: the unique index decides
    let (status, body) = app
        .post("/api/auth/signup", &signup_payload("Dup@Test.com"), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["status"], 409);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_concurrent_duplicate_signups_have_one_winner() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let payload = signup_payload("race@test.com");
    let (first, second) = tokio::join!(
        app.post("/api/auth/signup", &payload, None),
        app.post("/api/auth/signup", &payload, None),
    );

    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_login_failures_do_not_reveal_accounts() {
    let app = TestApp::new().await;
    app.cleanup().await;

    app.post("/api/auth/signup", &signup_payload("real@test.com"), None)
        .await;

    let (wrong_password_status, wrong_password_body) = app
        .post(
            "/api/auth/login",
            &serde_json::json!({"email": "real@test.com", "password": "Wrong!pass1"}),
            None,
        )
        .await;
    let (unknown_email_status, unknown_email_body) = app
        .post(
            "/api/auth/login",
            &serde_json::json!({"email": "ghost@test.com", "password": "Wrong!pass1"}),
            None,
        )
        .await;

    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email_status, StatusCode::UNAUTHORIZED);

    // Identical wording either way
    assert_eq!(wrong_password_body["error"], "Invalid email or password");
    assert_eq!(
        wrong_password_body["error"],
        unknown_email_body["error"]
    );
    assert_eq!(
        wrong_password_body["code"],
        unknown_email_body["code"]
    );

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_signup_sets_auth_cookie() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let app = TestApp::new().await;
    app.cleanup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(signup_payload("cookie@test.com").to_string()))
        .unwrap();
    let response = app.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("signup must set the auth cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("authToken="));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("SameSite=Strict"));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_listing_creation_requires_and_uses_identity() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let (_, body) = app
        .post("/api/auth/signup", &signup_payload("owner@test.com"), None)
        .await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let user_id = body["data"]["user"]["id"].as_str().unwrap().to_string();

    let listing = serde_json::json!({
        "title": "Ladder to borrow",
        "description": "A sturdy 3m aluminium ladder",
        "type": "offer",
        "category": "tools"
    });

    let (status, _) = app.post("/api/listings", &listing, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.post("/api/listings", &listing, Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["owner_id"], user_id.as_str());
    assert_eq!(body["data"]["type"], "offer");

    app.cleanup().await;
}
