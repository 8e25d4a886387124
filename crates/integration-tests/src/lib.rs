//! Integration tests for Ironvale Supply.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database and server
//! cargo run -p iv-cli -- migrate
//! cargo run -p iv-cli -- seed
//! cargo run -p ironvale-site
//!
//! # Run the ignored integration tests against it
//! cargo test -p ironvale-integration-tests -- --ignored
//! ```
//!
//! Tests are black-box: they talk to a running server over HTTP with a
//! seeded database and are ignored by default.

use reqwest::Client;
use serde_json::{Value, json};

/// Base URL for the site (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a plain HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// Log in with the seeded admin credentials and return the bearer token.
///
/// # Panics
///
/// Panics if login fails; the database must be seeded first.
pub async fn admin_token(client: &Client) -> String {
    let resp = client
        .post(format!("{}/api/admin/auth/login", base_url()))
        .json(&json!({"username": "admin", "password": "admin123"}))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), 200, "seeded admin login should succeed");

    let body: Value = resp.json().await.expect("login response not JSON");
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}
