//! Integration tests for the SignRequest client.

use signrequest::{Client, ClientConfig, SignRequestError};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: &str, subdomain: Option<&str>) -> Client {
    Client::with_config(
        token,
        subdomain,
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_client_creation() {
    let client = Client::new("test_token", None).unwrap();
    assert_eq!(client.base_url(), "https://signrequest.com/api/v1");
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let client = Client::with_config(
        "test_token",
        Some("acme"),
        ClientConfig {
            base_url: Some("https://custom.api.com".to_string()),
            timeout: Some(Duration::from_secs(60)),
            user_agent: Some("test-agent/1.0".to_string()),
            default_language: None,
        },
    )
    .unwrap();
    assert_eq!(client.base_url(), "https://custom.api.com");
    assert_eq!(client.subdomain(), Some("acme"));
}

#[tokio::test]
async fn test_token_header_sent_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc-123/"))
        .and(header("Authorization", "Token s3cr3t-T0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": "abc-123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "s3cr3t-T0ken", None);
    let document = client.documents().get("abc-123").await.unwrap();
    assert_eq!(document["uuid"], "abc-123");
}

#[tokio::test]
async fn test_subdomain_attached_as_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc-123/"))
        .and(query_param("subdomain", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token", Some("acme"));
    client.documents().get("abc-123").await.unwrap();
}

#[tokio::test]
async fn test_no_subdomain_leaves_query_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc-123/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token", None);
    client.documents().get("abc-123").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_status_210_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc-123/"))
        .respond_with(ResponseTemplate::new(210).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token", None);
    let result = client.documents().get("abc-123").await;

    match result {
        Err(SignRequestError::Api { status_code, .. }) => assert_eq!(status_code, 210),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc-123/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Invalid token."})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "invalid_token", None);
    let err = client.documents().get("abc-123").await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.body().unwrap().contains("Invalid token."));
}

#[tokio::test]
async fn test_transport_error_propagates() {
    // Nothing listens on the discard port.
    let client = Client::with_config(
        "test_token",
        None,
        ClientConfig {
            base_url: Some("http://127.0.0.1:9".to_string()),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        },
    )
    .unwrap();

    let result = client.documents().get("abc-123").await;
    assert!(matches!(result, Err(SignRequestError::Http(_))));
}
