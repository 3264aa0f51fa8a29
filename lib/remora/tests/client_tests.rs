//! Integration tests for `JsonApiClient` using wiremock.

use remora::{JsonApiClient, StatusCode};
use remora_document::{Document, ErrorObject, Resource};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn article_body() -> serde_json::Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": { "title": "JSON:API paints my bikeshed!" }
        }
    })
}

#[tokio::test]
async fn test_get_sends_accept_header_and_decodes_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/1"))
        .and(header("Accept", "application/vnd.api+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let response = client.get("/articles/1", &[]).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.status(), StatusCode::OK);

    let resource = response.document().resource().expect("single resource");
    assert_eq!(resource.kind, "articles");
    assert_eq!(resource.id.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_post_sends_media_type_headers_and_round_trips() {
    let mock_server = MockServer::start().await;

    let document = Document::from_resource(
        Resource::without_id("articles").attribute("title", json!("Omakase")),
    );

    Mock::given(method("POST"))
        .and(path("/articles"))
        .and(header("Content-Type", "application/vnd.api+json"))
        .and(header("Accept", "application/vnd.api+json"))
        .and(body_json(&document))
        .respond_with(ResponseTemplate::new(201).set_body_json(&document))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let response = client.post("/articles", &[], &document).await.expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(*response.document(), document);
}

#[tokio::test]
async fn test_path_and_query_replace_the_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Base URL carries a path and query that must NOT leak into requests.
    let base = format!("{}/v1/legacy?stale=1", mock_server.uri());
    let client = JsonApiClient::parse(base).expect("client");

    let response = client
        .get("/articles", &[("page[number]", "2")])
        .await
        .expect("response");
    assert!(response.is_success());

    let requests = mock_server.received_requests().await.expect("requests");
    let request = requests.first().expect("one request");
    assert_eq!(request.url.path(), "/articles");
    assert_eq!(request.url.query(), Some("page%5Bnumber%5D=2"));
}

#[tokio::test]
async fn test_repeated_query_keys_are_preserved_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    client
        .get("/articles", &[("sort", "age"), ("sort", "name")])
        .await
        .expect("response");

    let requests = mock_server.received_requests().await.expect("requests");
    let request = requests.first().expect("one request");
    assert_eq!(request.url.query(), Some("sort=age&sort=name"));
}

#[tokio::test]
async fn test_error_status_with_error_document_is_not_a_failure() {
    let mock_server = MockServer::start().await;

    let error_doc = Document::from_errors(vec![
        ErrorObject::new("404", "Not Found").detail("No such article."),
    ]);

    Mock::given(method("GET"))
        .and(path("/articles/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&error_doc))
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let response = client.get("/articles/999", &[]).await.expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.is_client_error());
    assert!(response.document().has_errors());
    assert_eq!(
        response
            .document()
            .errors
            .first()
            .and_then(|e| e.detail.as_deref()),
        Some("No such article.")
    );
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let err = client.get("/articles", &[]).await.expect_err("decode error");
    assert!(err.is_decode(), "expected decode error, got: {err}");
}

#[tokio::test]
async fn test_non_2xx_with_plain_text_body_stays_a_decode_error() {
    let mock_server = MockServer::start().await;

    // An intermediate proxy answering with text/plain, not JSON:API.
    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let err = client.get("/articles", &[]).await.expect_err("decode error");
    assert!(err.is_decode(), "expected decode error, got: {err}");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let url = url::Url::parse(&mock_server.uri()).expect("url");
    let client = JsonApiClient::builder(url)
        .timeout(std::time::Duration::from_millis(100))
        .build();

    let err = client.get("/slow", &[]).await.expect_err("timeout");
    assert!(err.is_timeout(), "expected timeout error, got: {err}");
}

#[tokio::test]
async fn test_connection_error() {
    let client = JsonApiClient::parse("http://127.0.0.1:1").expect("client");

    let err = client.get("/articles", &[]).await.expect_err("connection error");
    assert!(err.is_connection(), "expected connection error, got: {err}");
}

#[tokio::test]
async fn test_response_headers_and_empty_trailers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc123")
                .set_body_json(json!({ "data": [] })),
        )
        .mount(&mock_server)
        .await;

    let client = JsonApiClient::parse(mock_server.uri()).expect("client");
    let response = client.get("/articles", &[]).await.expect("response");

    assert_eq!(response.header("x-request-id"), Some("abc123"));
    assert!(response.trailers().is_empty());
}

#[tokio::test]
async fn test_raw_body_retention() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_body()))
        .mount(&mock_server)
        .await;

    let url = url::Url::parse(&mock_server.uri()).expect("url");
    let client = JsonApiClient::builder(url).keep_raw_body(true).build();

    let response = client.get("/articles/1", &[]).await.expect("response");
    let raw = response.raw().expect("raw body retained");

    // The raw bytes decode to the same value the document was decoded from.
    let reparsed: serde_json::Value = serde_json::from_slice(raw).expect("raw is JSON");
    assert_eq!(reparsed, article_body());

    // Default configuration drops the raw body.
    let plain = JsonApiClient::parse(mock_server.uri()).expect("client");
    let response = plain.get("/articles/1", &[]).await.expect("response");
    assert!(response.raw().is_none());
}
