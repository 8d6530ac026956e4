//! Tavily gateway contract tests.
//!
//! These tests verify the HTTP request format and the response/error
//! mapping of [`TavilyGateway`] against a local mock server.

use serde_json::json;
use websage_search::{
    execute, ConfidenceLevel, GatewayConfig, GatewayError, SearchDepth, SearchGateway,
    SearchRequest, TavilyGateway,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> TavilyGateway {
    let config = GatewayConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
        user_agent: Some("websage-test/1.0".into()),
    };
    TavilyGateway::new("tvly-test-key", &config).expect("gateway should build")
}

fn results_body() -> serde_json::Value {
    json!({
        "query": "rust",
        "response_time": 0.42,
        "results": [
            {"title": "Rust", "url": "https://www.rust-lang.org/", "content": "# Rust\nA language. Fast. Safe. Productive.", "score": 0.98},
            {"title": "Docs", "url": "https://doc.rust-lang.org/book", "content": "The **book**.", "score": 0.9},
            {"title": "Wiki", "url": "https://en.wikipedia.org/wiki/Rust", "content": "[edit] Rust is a language.", "score": 0.8}
        ]
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn request_has_bearer_key_and_fixed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("authorization", "Bearer tvly-test-key"))
        .and(header("user-agent", "websage-test/1.0"))
        .and(body_json(json!({
            "query": "rust",
            "search_depth": "advanced",
            "max_results": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body()))
        .expect(1)
        .mount(&server)
        .await;

    let results = gateway_for(&server)
        .search("rust", SearchDepth::Advanced)
        .await
        .expect("search should succeed");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].title, "Rust");
    assert_eq!(results[2].url, "https://en.wikipedia.org/wiki/Rust");
}

#[tokio::test]
async fn basic_depth_is_sent_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "query": "What is cats",
            "search_depth": "basic",
            "max_results": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let results = gateway_for(&server)
        .search("What is cats", SearchDepth::Basic)
        .await
        .expect("search should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn every_call_hits_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(2)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let _ = gateway.search("same", SearchDepth::Basic).await;
    let _ = gateway.search("same", SearchDepth::Basic).await;
}

// ────────────────────────────────────────────────────────────────────────────
// Error mapping
// ────────────────────────────────────────────────────────────────────────────

async fn error_for_status(code: u16) -> GatewayError {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(code).set_body_json(json!({"detail": {"error": "nope"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    gateway_for(&server)
        .search("rust", SearchDepth::Basic)
        .await
        .unwrap_err()
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
    assert_eq!(error_for_status(401).await, GatewayError::Unauthorized(401));
}

#[tokio::test]
async fn quota_statuses_map_to_quota_exceeded() {
    assert_eq!(error_for_status(429).await, GatewayError::QuotaExceeded(429));
    assert_eq!(error_for_status(432).await, GatewayError::QuotaExceeded(432));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    assert_eq!(error_for_status(500).await, GatewayError::Status(500));
}

#[tokio::test]
async fn missing_results_field_fails_fast() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "42"})))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .search("rust", SearchDepth::Basic)
        .await
        .unwrap_err();
    assert_eq!(err, GatewayError::MissingResults);
}

#[tokio::test]
async fn result_without_content_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "No content", "url": "https://a.com"}]
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .search("rust", SearchDepth::Basic)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("content")));
}

#[tokio::test]
async fn error_messages_never_contain_the_key() {
    for code in [401, 432, 500] {
        let err = error_for_status(code).await;
        assert!(!err.to_string().contains("tvly-test-key"));
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
        user_agent: None,
    };
    let gateway = TavilyGateway::new("tvly-test-key", &config).expect("gateway should build");
    let err = gateway
        .search("rust", SearchDepth::Basic)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Timeout(_)), "got {err:?}");
}

// ────────────────────────────────────────────────────────────────────────────
// End to end through the pipeline
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn pipeline_over_http_cleans_and_scores() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_body()))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let outcome = execute(&SearchRequest::single("tvly-test-key", "rust"), &gateway)
        .await
        .expect("valid request");

    let analyzed = outcome.topics()[0].result.clone().expect("search succeeded");
    assert_eq!(analyzed.verdict.distinct_domain_count, 3);
    assert_eq!(analyzed.verdict.level, ConfidenceLevel::Medium);
    assert_eq!(analyzed.snippets[0].summary, "Rust A language. Fast. Safe.");
    assert_eq!(analyzed.snippets[1].summary, "The book..");
    assert_eq!(analyzed.snippets[2].summary, "Rust is a language..");
}
