//! Login and admin gate integration tests.
//!
//! Run with: `cargo test -p gallery-api --test auth_test`

mod helpers;

use chrono::Utc;
use gallery_db::ImageStore;
use gallery_storage::Storage;
use helpers::auth::{bearer, login_token, TEST_PASSWORD, TEST_USERNAME};
use helpers::fixtures::{create_minimal_png, upload_form};
use helpers::{setup_test_app, setup_test_app_with, test_config};

#[tokio::test]
async fn test_login_returns_token() {
    let app = setup_test_app();
    let token = login_token(app.client()).await;
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": TEST_USERNAME, "password": "nope" }))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let app = setup_test_app();
    let response = app
        .client()
        .post("/api/auth/login")
        .content_type("application/json")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_login_without_configured_credentials() {
    let config = test_config(&[("ADMIN_PASSWORD", "")]);
    let app = setup_test_app_with(config);
    let response = app
        .client()
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Server configuration error");
    assert!(!body.to_string().contains("ADMIN_PASSWORD"));
}

#[tokio::test]
async fn test_admin_route_requires_token() {
    let app = setup_test_app();

    let started = Utc::now().timestamp();
    let response = app
        .client()
        .post("/api/admin/images")
        .multipart(upload_form(create_minimal_png(), "a.png", "veils"))
        .await;
    let finished = Utc::now().timestamp();
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");

    let response = app.client().delete("/api/admin/images/1").await;
    assert_eq!(response.status_code(), 401);

    assert!(app.images.is_empty().await);
    for ts in started..=finished {
        let key = format!("images/{}_veils.png", ts);
        assert!(!app.storage.exists(&key).await.unwrap(), "{}", key);
    }
}

#[tokio::test]
async fn test_unauthenticated_delete_keeps_row_and_blob() {
    let app = setup_test_app();
    let token = login_token(app.client()).await;
    let uploaded: serde_json::Value = app
        .client()
        .post("/api/admin/images")
        .add_header("Authorization", bearer(&token))
        .multipart(upload_form(create_minimal_png(), "a.png", "veils"))
        .await
        .json();
    let id = uploaded["image"]["id"].as_i64().unwrap();
    let s3_key = uploaded["image"]["s3_key"].as_str().unwrap().to_string();

    let response = app
        .client()
        .delete(&format!("/api/admin/images/{}", id))
        .await;
    assert_eq!(response.status_code(), 401);

    let response = app
        .client()
        .delete(&format!("/api/admin/images/{}", id))
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;
    assert_eq!(response.status_code(), 401);

    assert!(app.images.get_by_id(id).await.unwrap().is_some());
    assert!(app.storage.exists(&s3_key).await.unwrap());
}

#[tokio::test]
async fn test_admin_route_rejects_bad_tokens() {
    let app = setup_test_app();

    for header in ["Token abc", "Bearer not-a-jwt", "Bearer "] {
        let response = app
            .client()
            .delete("/api/admin/images/1")
            .add_header("Authorization", header)
            .await;
        assert_eq!(response.status_code(), 401, "{}", header);
    }
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let other = setup_test_app_with(test_config(&[("JWT_SECRET", "a-different-secret")]));
    let foreign_token = login_token(other.client()).await;

    let app = setup_test_app();
    let response = app
        .client()
        .delete("/api/admin/images/1")
        .add_header("Authorization", bearer(&foreign_token))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let app = setup_test_app();
    let token = login_token(app.client()).await;

    let response = app
        .client()
        .delete("/api/admin/images/12345")
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), 404);
}
