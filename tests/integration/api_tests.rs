//! API integration tests
//!
//! These run against a live server with an empty or seeded database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5001/api/v1";

fn machine_payload(serial: &str) -> Value {
    json!({
        "name": "Mower A",
        "model": "X1",
        "serial_number": serial,
        "machine_type": "Mower",
        "status": "Active",
        "purchase_date": "2024-01-01",
        "purchase_price": 1000.0
    })
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
async fn test_list_machines() {
    let client = Client::new();

    let response = client
        .get(format!("{}/machines", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_machine_hours_rollup() {
    let client = Client::new();

    // Create machine
    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&machine_payload("IT-SN-1"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let machine_id = body["id"].as_i64().expect("No machine ID");
    assert_eq!(body["operating_hours"], 0);

    // Log a four hour session
    let response = client
        .post(format!("{}/usage-logs", BASE_URL))
        .json(&json!({
            "machine_id": machine_id,
            "operator_name": "A",
            "start_time": "2024-02-01T08:00:00",
            "end_time": "2024-02-01T12:00:00",
            "hours_used": 4.0,
            "job_description": "mow"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let log: Value = response.json().await.expect("Failed to parse response");
    let log_id = log["id"].as_i64().expect("No usage log ID");

    let body: Value = client
        .get(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["operating_hours"], 4);

    // Deleting the log restores the total
    let response = client
        .delete(format!("{}/usage-logs/{}", BASE_URL, log_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let body: Value = client
        .get(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["operating_hours"], 0);

    // Cleanup
    let response = client
        .delete(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_serial_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&machine_payload("IT-SN-2"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let machine_id = body["id"].as_i64().expect("No machine ID");

    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&machine_payload("IT-SN-2"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Serial number already exists");

    // Cleanup
    let _ = client
        .delete(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_unknown_machine_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/machines/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_maintenance_rolls_up_last_maintenance_date() {
    let client = Client::new();

    let response = client
        .post(format!("{}/machines", BASE_URL))
        .json(&machine_payload("IT-SN-3"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let machine_id = body["id"].as_i64().expect("No machine ID");
    assert!(body["last_maintenance_date"].is_null());

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "machine_id": machine_id,
            "maintenance_type": "OilChange",
            "description": "Regular oil change",
            "performed_date": "2024-01-15",
            "performed_by": "John Smith",
            "cost": 25.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = client
        .get(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["last_maintenance_date"], "2024-01-15");

    // Cleanup (cascades to the maintenance record)
    let _ = client
        .delete(format!("{}/machines/{}", BASE_URL, machine_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_maintenance_against_unknown_machine_returns_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "machine_id": 999999,
            "maintenance_type": "OilChange",
            "description": "Regular oil change",
            "performed_date": "2024-01-15",
            "performed_by": "John Smith",
            "cost": 25.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
