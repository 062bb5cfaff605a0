use axum_test::TestServer;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

/// Log in with the test admin credential and return the bearer token.
pub async fn login_token(client: &TestServer) -> String {
    let response = client
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "username": TEST_USERNAME,
            "password": TEST_PASSWORD,
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("Expected 'token' in login response")
        .to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
