//! Integration tests for `ApiClient` over `HyperHandler` using wiremock.

use std::time::Duration;

use bytes::Bytes;
use twilio::middleware::LoggingLayer;
use twilio::tower::Layer;
use twilio::{ApiClient, ClientConfig, Context, Error, HttpClient, HyperHandler, Interrupted};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path},
};

const AUTHORIZATION: &str = "Basic YWNjOmF1dGg=";
const FORM: &str = "application/x-www-form-urlencoded";

fn client(mock_server: &MockServer) -> ApiClient {
    ApiClient::connect("acc", "auth", format!("{}/v2", mock_server.uri())).expect("client")
}

#[tokio::test]
async fn test_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Services/IS123"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Content-Type", FORM))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"sid":"IS123"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client(&mock_server)
        .get(&Context::background(), "/Services/IS123")
        .await
        .expect("body");

    assert_eq!(body, Bytes::from_static(br#"{"sid":"IS123"}"#));
}

#[tokio::test]
async fn test_post_request_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/Services"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Content-Type", FORM))
        .and(body_string(r#"{"friendly_name":"hello there"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"sid":"IS1"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client(&mock_server)
        .post(
            &Context::background(),
            "/Services",
            Bytes::from_static(br#"{"friendly_name":"hello there"}"#),
        )
        .await
        .expect("body");

    assert_eq!(body, Bytes::from_static(br#"{"sid":"IS1"}"#));
}

#[tokio::test]
async fn test_delete_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/Services/IS123"))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client(&mock_server)
        .delete(&Context::background(), "/Services/IS123")
        .await
        .expect("body");

    assert!(body.is_empty());
}

#[tokio::test]
async fn test_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Services/IS404"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"code":20404}"#))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .get(&Context::background(), "/Services/IS404")
        .await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_500_is_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .get(&Context::background(), "/Services")
        .await
        .expect_err("should fail");

    assert!(matches!(err, Error::UnexpectedStatus(500)));
    assert_eq!(err.to_string(), "unexpected status code: 500");
}

#[tokio::test]
async fn test_connection_refused() {
    // Grab a free port, then close it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let client =
        ApiClient::connect("acc", "auth", format!("http://127.0.0.1:{port}/v2")).expect("client");
    let err = client
        .get(&Context::background(), "/Services")
        .await
        .expect_err("should fail");

    assert!(err.is_transport());
    assert!(
        err.to_string()
            .starts_with(&format!("could not get a response for http://127.0.0.1:{port}/v2/Services"))
    );
}

#[tokio::test]
async fn test_deadline_on_slow_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let ctx = Context::background().with_timeout(Duration::from_millis(100));
    let err = client(&mock_server)
        .get(&ctx, "/Services")
        .await
        .expect_err("should time out");

    assert_eq!(err.interrupted(), Some(&Interrupted::DeadlineExceeded));
}

#[tokio::test]
async fn test_builder_with_config_and_logging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Services"))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .connect_timeout(Duration::from_secs(1))
        .pool_idle_per_host(1)
        .build();
    let handler = LoggingLayer::debug().layer(HyperHandler::with_config(config));
    let client = ApiClient::new("acc", "auth", format!("{}/v2", mock_server.uri()), handler)
        .expect("client");

    let body = client
        .get(&Context::background(), "/Services")
        .await
        .expect("body");

    assert_eq!(body, Bytes::from_static(b"{}"));
}
