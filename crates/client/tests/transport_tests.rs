//! REST transport tests.
//!
//! # Invariants
//! - Every status other than 429 is returned as a `Response`
//! - 429 triggers retry with exponential backoff until `max_retries`
//! - Request bodies are sent as JSON

mod common;

use common::*;
use wiremock::matchers::{body_string, header, method, path};

#[tokio::test]
async fn test_get_returns_body_and_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"took":4}"#))
        .mount(&mock_server)
        .await;

    let client = RestClient::new().unwrap();
    let response = client
        .get(&format!("{}/articles/_search", mock_server.uri()), None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    let json: serde_json::Value = response.json().unwrap();
    assert_eq!(json["took"], 4);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;
    let body = r#"{"title":"One"}"#;

    Mock::given(method("POST"))
        .and(path("/articles/article"))
        .and(header("content-type", "application/json"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RestClient::new().unwrap();
    let response = client
        .post(&format!("{}/articles/article", mock_server.uri()), body)
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"IndexMissingException[[missing] missing]"}"#))
        .mount(&mock_server)
        .await;

    let client = RestClient::new().unwrap();
    let response = client
        .delete(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(response.is_failure());
    assert!(response.body.contains("IndexMissingException"));
}

#[tokio::test]
async fn test_head_has_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = RestClient::new().unwrap();
    let response = client
        .head(&format!("{}/articles", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .mount(&mock_server)
        .await;

    let client = RestClient::from_http(reqwest::Client::new(), fast_retry(3));
    let response = client
        .put(&format!("{}/articles", mock_server.uri()), "{}")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_retry_exhausted_on_persistent_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = RestClient::from_http(reqwest::Client::new(), fast_retry(2));
    let err = client
        .get(&format!("{}/_search", mock_server.uri()), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(3)));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RestClient::from_http(reqwest::Client::new(), fast_retry(3));
    let response = client
        .get(&format!("{}/_search", mock_server.uri()), None)
        .await
        .unwrap();

    assert_eq!(response.status, 503);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = RestClient::new().unwrap();
    let err = client.get("http://127.0.0.1:1/_search", None).await.unwrap_err();
    assert!(matches!(err, ClientError::HttpError(_)));
}
