//! The network seam between the bridge and the HTTP stack.
//!
//! The bridge describes each exchange as a plain [`HttpRequest`] and hands it
//! to a [`Transport`]. [`ReqwestTransport`] performs the real round trip;
//! tests substitute a mock to observe requests without touching the network.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::request::{Response, Verb};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder};
use url::Url;

/// A fully resolved outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP verb
    pub verb: Verb,
    /// Absolute target URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized JSON payload
    pub body: Option<Vec<u8>>,
}

/// Performs one HTTP round trip.
///
/// Implementations return a [`Response`] for any completed exchange, whatever
/// its status, and fail with [`Error::TransportError`] only when no response
/// was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the completed response.
    async fn execute(&self, request: HttpRequest) -> Result<Response>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build the underlying HTTP client from the timeouts and user agent in
    /// `config`. Unset values keep reqwest's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Response> {
        let mut builder = self
            .http
            .request(request.verb.method(), request.url)
            .headers(request.headers);

        if let Some(payload) = request.body {
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        if request.verb == Verb::Head {
            return Ok(Response::new(status, Vec::new()));
        }

        let raw = response.bytes().await?;
        Ok(Response::new(status, raw.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(&ClientConfig::new("token")).unwrap()
    }

    fn request(server: &MockServer, verb: Verb, target: &str, body: Option<&str>) -> HttpRequest {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        HttpRequest {
            verb,
            url: Url::parse(&format!("{}/{target}", server.uri())).unwrap(),
            headers,
            body: body.map(|b| b.as_bytes().to_vec()),
        }
    }

    #[tokio::test]
    async fn sends_payload_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/droplets/1"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"{"a":1}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport()
            .execute(request(&server, Verb::Put, "droplets/1", Some(r#"{"a":1}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), Some(&serde_json::json!({"ok": true})));
    }

    #[tokio::test]
    async fn non_success_status_is_a_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/droplets/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"id":"not_found"}"#))
            .mount(&server)
            .await;

        let response = transport()
            .execute(request(&server, Verb::Get, "droplets/9", None))
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert!(response.body().is_some());
    }

    #[tokio::test]
    async fn head_skips_body() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let response = transport()
            .execute(request(&server, Verb::Head, "account", None))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert!(response.raw().is_empty());
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let url = Url::parse(&format!("http://127.0.0.1:{port}/account")).unwrap();

        let err = transport()
            .execute(HttpRequest {
                verb: Verb::Get,
                url,
                headers: HeaderMap::new(),
                body: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TransportError(_)));
    }
}
