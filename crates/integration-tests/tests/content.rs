//! Integration tests for the content CRUD surface.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A seeded database (cargo run -p iv-cli -- seed)
//! - The site running (cargo run -p ironvale-site)
//!
//! Run with: cargo test -p ironvale-integration-tests -- --ignored

use ironvale_integration_tests::{admin_token, base_url, client};
use serde_json::{Value, json};
use uuid::Uuid;

/// Unique marker so concurrent test runs don't collide.
fn marker() -> String {
    Uuid::new_v4().simple().to_string()
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_created_section_appears_in_listing() {
    let client = client();
    let token = admin_token(&client).await;
    let name = format!("test-{}", marker());

    let resp = client
        .post(format!("{}/api/admin/sections", base_url()))
        .bearer_auth(&token)
        .json(&json!({"name": name, "title": "Test Section"}))
        .send()
        .await
        .expect("create failed");
    assert_eq!(resp.status(), 201);

    let created: Value = resp.json().await.expect("not JSON");
    let id = created["id"].as_i64().expect("missing id");

    let listing: Value = client
        .get(format!("{}/api/admin/sections", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("list failed")
        .json()
        .await
        .expect("not JSON");

    let found = listing
        .as_array()
        .expect("listing not array")
        .iter()
        .any(|s| s["id"].as_i64() == Some(id));
    assert!(found, "created section should appear in the listing");

    // Cleanup
    client
        .delete(format!("{}/api/admin/sections/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("cleanup failed");
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_update_is_idempotent() {
    let client = client();
    let token = admin_token(&client).await;
    let name = format!("test-{}", marker());

    let created: Value = client
        .post(format!("{}/api/admin/brands", base_url()))
        .bearer_auth(&token)
        .json(&json!({"name": name}))
        .send()
        .await
        .expect("create failed")
        .json()
        .await
        .expect("not JSON");
    let id = created["id"].as_i64().expect("missing id");

    let payload = json!({"name": format!("{name}-renamed"), "order_index": 5});

    let first: Value = client
        .put(format!("{}/api/admin/brands/{id}", base_url()))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await
        .expect("first update failed")
        .json()
        .await
        .expect("not JSON");

    let second: Value = client
        .put(format!("{}/api/admin/brands/{id}", base_url()))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await
        .expect("second update failed")
        .json()
        .await
        .expect("not JSON");

    assert_eq!(first["name"], second["name"]);
    assert_eq!(first["order_index"], second["order_index"]);

    // Cleanup
    client
        .delete(format!("{}/api/admin/brands/{id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("cleanup failed");
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_updating_missing_row_is_404() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .put(format!("{}/api/admin/brands/999999", base_url()))
        .bearer_auth(&token)
        .json(&json!({"name": "ghost"}))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_deleting_section_cascades_to_services() {
    let client = client();
    let token = admin_token(&client).await;
    let name = format!("test-{}", marker());

    let section: Value = client
        .post(format!("{}/api/admin/sections", base_url()))
        .bearer_auth(&token)
        .json(&json!({"name": name, "title": "Cascade Test"}))
        .send()
        .await
        .expect("create section failed")
        .json()
        .await
        .expect("not JSON");
    let section_id = section["id"].as_i64().expect("missing id");

    let service: Value = client
        .post(format!("{}/api/admin/services", base_url()))
        .bearer_auth(&token)
        .json(&json!({
            "section_id": section_id,
            "title": "Doomed Service",
            "features": ["one", "two"],
        }))
        .send()
        .await
        .expect("create service failed")
        .json()
        .await
        .expect("not JSON");
    let service_id = service["id"].as_i64().expect("missing id");

    let resp = client
        .delete(format!("{}/api/admin/sections/{section_id}", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete failed");
    assert_eq!(resp.status(), 204);

    let services: Value = client
        .get(format!("{}/api/admin/services", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("list failed")
        .json()
        .await
        .expect("not JSON");

    let still_there = services
        .as_array()
        .expect("not array")
        .iter()
        .any(|s| s["id"].as_i64() == Some(service_id));
    assert!(!still_there, "service should be gone after section delete");
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_missing_required_field_is_400() {
    let client = client();
    let token = admin_token(&client).await;

    let resp = client
        .post(format!("{}/api/admin/sections", base_url()))
        .bearer_auth(&token)
        .json(&json!({"name": "", "title": "No Name"}))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_public_contact_submission() {
    let client = client();

    let resp = client
        .post(format!("{}/api/contact", base_url()))
        .json(&json!({
            "name": "Pat Visitor",
            "email": "pat@example.com",
            "message": "Do you stock spherical roller bearings?",
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.expect("not JSON");
    assert_eq!(body["success"], true);
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
#[ignore = "Requires running site server and seeded database"]
async fn test_contact_rejects_bad_email() {
    let client = client();

    let resp = client
        .post(format!("{}/api/contact", base_url()))
        .json(&json!({
            "name": "Pat Visitor",
            "email": "not-an-email",
            "message": "Hello",
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 400);
}
