//! End-to-end tests for the umbrella client against a mock API server.

use digitalocean::{ClientConfig, DigitalOceanClient, Error, StatusPolicy};
use serde_json::{json, Map, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "dop_v1_integration";

fn client_for(server: &MockServer) -> DigitalOceanClient {
    let config = ClientConfig::new(TOKEN).with_base_url(format!("{}/v2/", server.uri()));
    DigitalOceanClient::new(config).unwrap()
}

fn unauthorized_body() -> Value {
    json!({"id": "unauthorized", "message": "Unable to authenticate you."})
}

#[tokio::test]
async fn resource_clients_share_one_base_url() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let expected = format!("{}/v2/", server.uri());
    assert_eq!(client.bridge().base_url().as_str(), expected);
    assert_eq!(client.account.base_url().as_str(), expected);
    assert_eq!(client.actions.base_url().as_str(), expected);
    assert_eq!(client.droplets.base_url().as_str(), expected);
}

#[tokio::test]
async fn every_resource_sends_bearer_token() {
    let server = MockServer::start().await;
    for route in ["/v2/account", "/v2/actions", "/v2/droplets"] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", "Bearer dop_v1_integration"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": route})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    assert_eq!(
        client.account.get_user_information().await.unwrap()["ok"],
        "/v2/account"
    );
    assert_eq!(client.actions.get_actions().await.unwrap()["ok"], "/v2/actions");
    assert_eq!(client.droplets.get_droplets().await.unwrap()["ok"], "/v2/droplets");
}

#[tokio::test]
async fn get_droplet_by_id_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplet": {"id": 123}})))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .droplets
        .get_droplet_by_id(123)
        .await
        .unwrap();
    assert_eq!(body, json!({"droplet": {"id": 123}}));
}

#[tokio::test]
async fn unauthorized_marker_at_200_and_401() {
    for status in [200, 401] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/account"))
            .respond_with(ResponseTemplate::new(status).set_body_json(unauthorized_body()))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .account
            .get_user_information()
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::AuthError {
                message: "Unable to authenticate you.".to_string()
            },
            "status {status}"
        );
    }
}

#[tokio::test]
async fn delete_status_only_results() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/123"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/123"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.droplets.delete_droplet_by_id(123).await.unwrap());

    let err = client.droplets.delete_droplet_by_id(123).await.unwrap_err();
    assert_eq!(
        err,
        Error::ApiError {
            status: 404,
            message: None
        }
    );
}

#[tokio::test]
async fn missing_attribute_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let mut attributes = Map::new();
    attributes.insert("name".to_string(), json!("web-1"));
    attributes.insert("region".to_string(), json!("nyc3"));
    attributes.insert("size".to_string(), json!("s-1vcpu-1gb"));

    let err = client_for(&server)
        .droplets
        .create_droplet(&attributes)
        .await
        .unwrap_err();
    assert_eq!(err, Error::MissingAttribute("image".to_string()));
    assert!(err.is_caller_error());
}

#[tokio::test]
async fn unsupported_verb_through_bridge() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .bridge()
        .send("PATCH", "droplets/1", Some(json!({"name": "renamed"})))
        .await
        .unwrap_err();
    assert_eq!(err, Error::UnsupportedVerb("PATCH".to_string()));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig::new(TOKEN).with_base_url(format!("http://127.0.0.1:{port}/v2/"));
    let err = DigitalOceanClient::new(config)
        .unwrap()
        .droplets
        .get_droplets()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TransportError(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn strict_policy_applies_to_every_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "id": "service_unavailable",
            "message": "Try again later."
        })))
        .mount(&server)
        .await;

    let config = ClientConfig::new(TOKEN)
        .with_base_url(format!("{}/v2/", server.uri()))
        .with_status_policy(StatusPolicy::Strict);
    let client = DigitalOceanClient::new(config).unwrap();

    let err = client.actions.get_action_by_id(5).await.unwrap_err();
    assert_eq!(
        err,
        Error::ApiError {
            status: 503,
            message: Some("Try again later.".to_string())
        }
    );
    assert_eq!(client.droplets.get_images().await.unwrap_err().status(), Some(503));
}

#[tokio::test]
async fn token_never_sent_outside_base_url() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&other)
        .await;

    let client = client_for(&server);
    let err = client
        .bridge()
        .send("GET", &format!("{}/steal", other.uri()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)));

    let err = client
        .bridge()
        .send("GET", "../account", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)));
}
