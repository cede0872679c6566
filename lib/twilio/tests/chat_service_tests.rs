//! Chat service tests against a mock server.

use twilio::chat::{Service, ServiceApi, ServiceUpdateParams};
use twilio::{ApiClient, Context, Error, from_json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

const SERVICE: &str = include_str!("fixtures/service.json");
const INVALID: &str = include_str!("fixtures/invalid.json");

fn services(mock_server: &MockServer) -> ServiceApi<ApiClient> {
    let client =
        ApiClient::connect("acc", "auth", format!("{}/v2", mock_server.uri())).expect("client");
    ServiceApi::new(client)
}

fn expected() -> Service {
    from_json(SERVICE.as_bytes()).expect("fixture")
}

#[tokio::test]
async fn test_read() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/Services/IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SERVICE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = services(&mock_server)
        .read(&Context::background(), "IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e")
        .await
        .expect("service");

    assert_eq!(service, expected());
    assert_eq!(service.friendly_name, "hello there");
    assert_eq!(service.limits.channel_members, 100);
    assert_eq!(service.webhook_filters, ["onMessageSent", "onChannelDestroyed"]);
    assert!(service.links.roles.ends_with("/Roles"));
}

#[tokio::test]
async fn test_read_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = services(&mock_server)
        .read(&Context::background(), "IS404")
        .await;

    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_read_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INVALID))
        .mount(&mock_server)
        .await;

    let err = services(&mock_server)
        .read(&Context::background(), "IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e")
        .await
        .expect_err("should not decode");

    let Error::Parse { path, .. } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(path, "limits.channel_members");
}

#[tokio::test]
async fn test_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/Services"))
        .and(body_json(serde_json::json!({ "friendly_name": "hello there" })))
        .respond_with(ResponseTemplate::new(201).set_body_string(SERVICE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = services(&mock_server)
        .create(&Context::background(), &ServiceUpdateParams::new("hello there"))
        .await
        .expect("service");

    assert_eq!(service, expected());
}

#[tokio::test]
async fn test_create_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = services(&mock_server)
        .create(&Context::background(), &ServiceUpdateParams::new("hello there"))
        .await
        .expect_err("should fail");

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_update() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/Services/IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e"))
        .and(body_json(serde_json::json!({ "friendly_name": "renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_string(SERVICE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = services(&mock_server)
        .update(
            &Context::background(),
            "IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e",
            &ServiceUpdateParams::new("renamed"),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/Services/IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    services(&mock_server)
        .delete(&Context::background(), "IS2aa6f9a3cfe2ff5cbdb9ee8e65a3bc2e")
        .await
        .expect("deleted");
}

#[tokio::test]
async fn test_delete_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = services(&mock_server)
        .delete(&Context::background(), "IS404")
        .await;

    assert!(matches!(result, Err(Error::NotFound)));
}
