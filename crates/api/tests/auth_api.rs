//! Integration tests for `/api/admin/auth` and the bearer-token gate.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, get, get_auth, get_with_authorization, post_json, TestApp, ADMIN_EMAIL,
    ADMIN_PASSWORD,
};
use folio_api::auth::jwt::Claims;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_returns_bearer_token_and_identity() {
    let test = TestApp::new().await;
    let response = post_json(
        test.router(),
        "/api/admin/auth/login",
        json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["admin"]["email"], ADMIN_EMAIL);
    assert_eq!(json["admin"]["role"], "owner");
    assert!(json["admin"].get("password_hash").is_none());

    // The issued token opens the admin routes.
    let token = json["token"].as_str().unwrap();
    let me = get_auth(test.router(), "/api/admin/auth/me", token).await;
    assert_eq!(me.status(), StatusCode::OK);
    let me = body_json(me).await;
    assert_eq!(me["email"], ADMIN_EMAIL);
    assert_eq!(me["id"], json["admin"]["id"]);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_get_identical_responses() {
    let test = TestApp::new().await;

    let wrong_password = post_json(
        test.router(),
        "/api/admin/auth/login",
        json!({"email": ADMIN_EMAIL, "password": "not-the-password"}),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = post_json(
        test.router(),
        "/api/admin/auth/login",
        json!({"email": "stranger@example.com", "password": ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    assert_eq!(wrong_password["code"], "INVALID_CREDENTIALS");
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn login_with_missing_fields_is_a_validation_error() {
    let test = TestApp::new().await;
    let response = post_json(test.router(), "/api/admin/auth/login", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: email, password");
}

#[tokio::test]
async fn login_with_malformed_json_is_a_bad_request() {
    let test = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/auth/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = test.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Token gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    let test = TestApp::new().await;

    for uri in [
        "/api/admin/auth/me",
        "/api/admin/projects",
        "/api/admin/messages",
    ] {
        let response = get(test.router(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_TOKEN", "{uri}");
    }
}

#[tokio::test]
async fn non_bearer_authorization_is_rejected() {
    let test = TestApp::new().await;
    let response = get_with_authorization(
        test.router(),
        "/api/admin/auth/me",
        &format!("Basic {}", test.token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let test = TestApp::new().await;
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        email: ADMIN_EMAIL.into(),
        role: "owner".into(),
        exp: now + 3600,
        iat: now,
        jti: "forged".into(),
    };
    let forged = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = get_auth(test.router(), "/api/admin/auth/me", &forged).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn expired_token_is_reported_as_expired() {
    let test = TestApp::new().await;
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: 1,
        email: ADMIN_EMAIL.into(),
        role: "owner".into(),
        exp: now - 3600,
        iat: now - 7200,
        jti: "expired".into(),
    };
    let expired = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::test_jwt_config().secret.as_bytes()),
    )
    .unwrap();

    let response = get_auth(test.router(), "/api/admin/auth/me", &expired).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn public_routes_need_no_token() {
    let test = TestApp::new().await;

    let response = get(test.router(), "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(test.router(), "/api/content").await;
    assert_eq!(response.status(), StatusCode::OK);
}
