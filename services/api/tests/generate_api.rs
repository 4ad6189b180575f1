//! End-to-end tests for the generation endpoint.
//!
//! Each test spins up the full router on an ephemeral port and drives it
//! over HTTP with reqwest, covering the success path, both error paths,
//! and the request-decoding fallbacks.

use chrono::{Datelike, NaiveDate, Utc};
use tokio::net::TcpListener;

/// Checksum-valid reference number with birth date 1949-12-31.
const VALID_ID: &str = "11010519491231002X";

/// Checksum-valid number carrying the impossible date 2023-02-30.
const IMPOSSIBLE_DATE_ID: &str = "110105202302300016";

const INVALID_ID_MESSAGE: &str = "请输入有效的18位身份证号码";
const INVALID_BIRTH_DATE_MESSAGE: &str = "身份证号码中的出生日期无效";

async fn spawn_server() -> String {
    let app = idstem_api::api::create_router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Completed years from `birth` to today, computed independently of the
/// server so the assertion holds whenever the test runs.
fn expected_age(birth: NaiveDate) -> u32 {
    let today = Utc::now().date_naive();
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years as u32
}

#[tokio::test]
async fn valid_id_returns_ids_and_age() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base_url)
        .json(&serde_json::json!({ "id_number": VALID_ID }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    let ids = body["ids"].as_array().unwrap();
    assert_eq!(ids.len(), 12);
    assert_eq!(ids[0], VALID_ID);
    assert_eq!(ids[1], format!("{VALID_ID}_寸照"));
    assert_eq!(ids[2], format!("{VALID_ID}_身份证"));
    assert_eq!(ids[11], format!("{VALID_ID}_证书反面"));

    let birth = NaiveDate::from_ymd_opt(1949, 12, 31).unwrap();
    assert_eq!(body["age"], expected_age(birth));
}

#[tokio::test]
async fn malformed_id_returns_invalid_identifier_error() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base_url)
        .json(&serde_json::json!({ "id_number": "1234" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], INVALID_ID_MESSAGE);
}

#[tokio::test]
async fn impossible_birth_date_returns_invalid_date_error() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base_url)
        .json(&serde_json::json!({ "id_number": IMPOSSIBLE_DATE_ID }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], INVALID_BIRTH_DATE_MESSAGE);
}

#[tokio::test]
async fn missing_field_is_treated_as_empty_and_rejected() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base_url)
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], INVALID_ID_MESSAGE);
}

#[tokio::test]
async fn form_encoded_body_is_accepted() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&base_url)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(format!("id_number={VALID_ID}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ids"][0], VALID_ID);
}

#[tokio::test]
async fn generation_is_deterministic_across_requests() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let mut lists = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(&base_url)
            .json(&serde_json::json!({ "id_number": VALID_ID }))
            .send()
            .await
            .unwrap();
        let body: serde_json::Value = response.json().await.unwrap();
        lists.push(body["ids"].clone());
    }
    assert_eq!(lists[0], lists[1]);
}

#[tokio::test]
async fn get_serves_the_form_page() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(&base_url).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains("id_number"));
}

#[tokio::test]
async fn healthz_reports_service_name() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base_url}/healthz"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "idstem-api");
}
