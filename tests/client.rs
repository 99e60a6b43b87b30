//! HTTP client tests against a mock store server.

use std::time::Duration;

use kvscope::api::{ApiError, StoreClient};
use kvscope::query::{KeyQuery, SearchMode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(server.uri(), Duration::from_secs(5)).expect("client builds")
}

fn query(text: &str, mode: SearchMode, offset: u64) -> KeyQuery {
    KeyQuery {
        text: text.to_string(),
        mode,
        offset,
        limit: 50,
    }
}

#[tokio::test]
async fn fetch_stats_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "db_path": "/var/data/store",
            "total_keys": 1234,
            "db_size_bytes": 4_194_304,
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server).fetch_stats().await.unwrap();
    assert_eq!(stats.db_path, "/var/data/store");
    assert_eq!(stats.total_keys, 1234);
    assert_eq!(stats.db_size_bytes, 4_194_304);
}

#[tokio::test]
async fn fetch_keys_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .and(query_param("q", "user:"))
        .and(query_param("mode", "prefix"))
        .and(query_param("offset", "50"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": ["user:1", "user:2"],
            "total": 52,
            "offset": 50,
            "limit": 50,
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .fetch_keys(&query("user:", SearchMode::Prefix, 50))
        .await
        .unwrap();
    assert_eq!(page.keys, vec!["user:1", "user:2"]);
    assert_eq!(page.total, 52);
}

#[tokio::test]
async fn fetch_keys_substring_mode_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .and(query_param("mode", "substring"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": [],
            "total": 0,
            "offset": 0,
            "limit": 50,
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .fetch_keys(&query("x", SearchMode::Substring, 0))
        .await
        .unwrap();
    assert!(page.keys.is_empty());
}

#[tokio::test]
async fn fetch_keys_tolerates_null_key_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": null,
            "total": 0,
            "offset": 0,
            "limit": 50,
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .fetch_keys(&query("", SearchMode::Prefix, 0))
        .await
        .unwrap();
    assert!(page.keys.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn fetch_keys_server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_keys(&query("", SearchMode::Prefix, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn fetch_keys_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_keys(&query("", SearchMode::Prefix, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Parse { context: "keys", .. }));
}

#[tokio::test]
async fn fetch_value_parses_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/user:1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "key": "user:1",
            "value": "{\"name\":\"ada\"}",
            "value_hex": "7b226e616d65223a22616461227d",
            "size": 14,
        })))
        .mount(&server)
        .await;

    let record = client_for(&server).fetch_value("user:1").await.unwrap();
    assert_eq!(record.key, "user:1");
    assert_eq!(record.size, 14);
}

#[tokio::test]
async fn fetch_value_percent_encodes_the_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/a%20b%25c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "key": "a b%c",
            "value": "v",
            "value_hex": "76",
            "size": 1,
        })))
        .mount(&server)
        .await;

    let record = client_for(&server).fetch_value("a b%c").await.unwrap();
    assert_eq!(record.key, "a b%c");
}

#[tokio::test]
async fn fetch_value_missing_key_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/key/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_value("gone").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::NotFound { key } if key == "gone"));
}

#[tokio::test]
async fn fetch_stats_connection_refused_is_network_error() {
    // Port from a server that has been shut down: nothing is listening.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = StoreClient::new(uri, Duration::from_secs(1)).unwrap();
    let err = client.fetch_stats().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
