mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn healthz_is_public() {
    let app = TestApp::new().await;
    let (status, body) = app.send(Method::GET, "/api/v1/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(Method::GET, "/api/v1/categories", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/v1/categories", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_then_login_grants_access() {
    let app = TestApp::new().await;

    let (status, user) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "email": " Alice@Example.com ", "password": "correct horse battery" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "alice@example.com");
    assert!(user.get("passwordHash").is_none());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "correct horse battery" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);
    let token = body["accessToken"].as_str().unwrap();

    let (status, body) = app.get("/api/v1/categories", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;
    app.sign_up("bob@example.com").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "bob@example.com", "password": "wrong password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "correct horse battery" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn registration_validates_and_rejects_duplicates() {
    let app = TestApp::new().await;
    app.sign_up("carol@example.com").await;

    let cases = [
        (
            json!({ "email": "CAROL@example.com", "password": "another password" }),
            StatusCode::CONFLICT,
        ),
        (
            json!({ "email": "dave@example.com", "password": "short" }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "email": "not-an-email", "password": "long enough password" }),
            StatusCode::BAD_REQUEST,
        ),
    ];
    for (payload, expected) in cases {
        let (status, body) = app
            .send(Method::POST, "/api/v1/auth/register", None, Some(payload))
            .await;
        assert_eq!(status, expected);
        assert_eq!(body["code"], expected.as_u16());
    }
}
