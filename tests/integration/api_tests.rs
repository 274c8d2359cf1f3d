//! API integration tests against a running server

use chrono::{FixedOffset, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8550/api/v1";

/// Today's date at the default front desk offset (UTC+3)
fn today() -> String {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    Utc::now().with_timezone(&offset).format("%d.%m.%Y").to_string()
}

async fn register(client: &Client, visit_date: &str) -> Value {
    let response = client
        .post(format!("{}/visitors", BASE_URL))
        .json(&json!({
            "name": "Ana",
            "surname": "Doe",
            "company_name": "Acme",
            "visitors_count": "2",
            "host": "Bob",
            "visit_date": visit_date
        }))
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse registration")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_register_and_lookup() {
    let client = Client::new();
    let body = register(&client, "25.12.2030").await;
    let identifier = body["visitor"]["identifier"].as_str().expect("No identifier");
    assert!(body["token_png_base64"].is_string());

    let response = client
        .get(format!("{}/visitors/{}", BASE_URL, identifier))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let visitor: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(visitor["visit_date"], "25.12.2030");
}

#[tokio::test]
#[ignore]
async fn test_check_in_today_and_check_out() {
    let client = Client::new();
    let body = register(&client, &today()).await;
    let identifier = body["visitor"]["identifier"].as_str().expect("No identifier");

    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .json(&json!({ "identifier": identifier }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let result: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(result["host"], "Bob");

    let response = client
        .post(format!("{}/check-outs", BASE_URL))
        .json(&json!({ "identifier": identifier }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_check_in_wrong_date() {
    let client = Client::new();
    let body = register(&client, "01.01.2099").await;
    let identifier = body["visitor"]["identifier"].as_str().expect("No identifier");

    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .json(&json!({ "identifier": identifier }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let error: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(error["expected_visit_date"], "01.01.2099");
}

#[tokio::test]
#[ignore]
async fn test_issue_access_card() {
    let client = Client::new();
    let body = register(&client, &today()).await;
    let identifier = body["visitor"]["identifier"].as_str().expect("No identifier");

    let response = client
        .post(format!("{}/access-cards", BASE_URL))
        .json(&json!({
            "identifier": identifier,
            "phone_number": "+100",
            "card_number": "C1"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/access-cards/today", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let cards: Value = response.json().await.expect("Failed to parse response");
    let found = cards
        .as_array()
        .expect("Expected an array")
        .iter()
        .any(|c| c["identifier"] == identifier);
    assert!(found);
}

#[tokio::test]
#[ignore]
async fn test_unknown_identifier() {
    let client = Client::new();

    let response = client
        .post(format!("{}/check-outs", BASE_URL))
        .json(&json!({ "identifier": "not-a-registered-token" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
