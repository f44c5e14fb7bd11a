//! Integration tests for `DealsClient::fetch_deals`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers both response shapes, the query contract,
//! and the fixed-delay retry behavior (transport-level failures, non-2xx
//! statuses, and malformed 2xx bodies all consume attempts).

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rdsync_client::{ClientError, DealsClient};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

/// Builds a `DealsClient` against the mock server: 5-second timeout,
/// per_page 200, single attempt, no delay.
fn test_client(server: &MockServer) -> DealsClient {
    test_client_with_retries(server, 1)
}

fn test_client_with_retries(server: &MockServer, attempts: u32) -> DealsClient {
    let base_url = format!("{}/api/v1/deals", server.uri());
    DealsClient::new(&base_url, "test-token", 5, 200, attempts, 0)
        .expect("failed to build test DealsClient")
}

#[tokio::test]
async fn fetch_deals_sends_the_full_query_contract() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .and(header("accept", "application/json"))
        .and(query_param("token", "test-token"))
        .and(query_param("created_at_period", "true"))
        .and(query_param("start_date", "2024-07-01T00:00:01"))
        .and(query_param("end_date", "2024-07-01T23:59:59"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"deals": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_deals(day(), 1).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert_eq!(result.unwrap().record_count(), 1);
}

#[tokio::test]
async fn fetch_deals_accepts_the_object_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            &json!({"deals": [{"id": 1}, {"id": 2}], "total": 2, "has_more": false}),
        ))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client.fetch_deals(day(), 1).await.unwrap();

    assert_eq!(page.record_count(), 2);
    assert_eq!(page.has_more_hint(), Some(false));
}

#[tokio::test]
async fn fetch_deals_accepts_the_bare_array_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([{"id": 1}, {"id": 2}])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client.fetch_deals(day(), 1).await.unwrap();

    assert_eq!(page.record_count(), 2);
    assert_eq!(page.has_more_hint(), None);
}

#[tokio::test]
async fn fetch_deals_retries_after_5xx_and_succeeds() {
    let server = MockServer::start().await;

    // First request returns 503 (served once), second falls through to 200.
    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"deals": [{"id": 42}]})))
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server, 2);
    let result = client.fetch_deals(day(), 1).await;

    assert!(result.is_ok(), "expected Ok after retry, got: {result:?}");
    assert_eq!(result.unwrap().record_count(), 1);
}

#[tokio::test]
async fn fetch_deals_spends_exactly_the_attempt_budget_on_persistent_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3) // attempts=3 means exactly 3 requests, no more
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server, 3);
    let result = client.fetch_deals(day(), 1).await;

    assert!(result.is_err(), "expected Err after exhausting attempts");
    match result.unwrap_err() {
        ClientError::UnexpectedStatus { status, page, .. } => {
            assert_eq!(status, 503);
            assert_eq!(page, 1);
        }
        other => panic!("expected ClientError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_deals_makes_a_single_request_when_attempts_is_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_deals(day(), 1).await;

    assert!(result.is_err(), "expected Err for persistent 500");
}

#[tokio::test]
async fn fetch_deals_retries_malformed_2xx_body_and_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"deals": [{"id": 7}]})))
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server, 2);
    let result = client.fetch_deals(day(), 1).await;

    assert!(
        result.is_ok(),
        "expected Ok after malformed-body retry, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_deals_surfaces_deserialize_error_after_exhausting_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server, 2);
    let result = client.fetch_deals(day(), 1).await;

    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected ClientError::Deserialize, got: {result:?}"
    );
}
