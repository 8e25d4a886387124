//! Integration tests for admin authentication.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A seeded database (cargo run -p iv-cli -- seed)
//! - The site running (cargo run -p ironvale-site)
//!
//! Run with: cargo test -p ironvale-integration-tests -- --ignored

use ironvale_integration_tests::{admin_token, base_url, client};
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_login_with_seeded_credentials() {
    let client = client();
    let resp = client
        .post(format!("{}/api/admin/auth/login", base_url()))
        .json(&json!({"username": "admin", "password": "admin123"}))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.expect("not JSON");
    assert!(body["token"].as_str().is_some_and(|t| t.contains('.')));
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_login_with_wrong_password() {
    let client = client();
    let resp = client
        .post(format!("{}/api/admin/auth/login", base_url()))
        .json(&json!({"username": "admin", "password": "wrong"}))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_unknown_username_fails_identically() {
    let client = client();
    let resp = client
        .post(format!("{}/api/admin/auth/login", base_url()))
        .json(&json!({"username": "no-such-user", "password": "whatever"}))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_me_returns_token_principal() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .get(format!("{}/api/admin/auth/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_admin_endpoints_reject_missing_token() {
    let client = client();
    let resp = client
        .get(format!("{}/api/admin/sections", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_admin_endpoints_reject_tampered_token() {
    let client = client();
    let token = admin_token(&client).await;

    // Flip the last character of the signature half
    let mut tampered = token.clone();
    let replacement = if tampered.ends_with('A') { 'B' } else { 'A' };
    tampered.pop();
    tampered.push(replacement);

    let resp = client
        .get(format!("{}/api/admin/sections", base_url()))
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 401);
}
