//! The transport bridge shared by every resource client.
//!
//! A [`Bridge`] turns a `(verb, path, body)` triple into one authenticated
//! exchange against `<base_url><path>`. It holds no per-call state: the status
//! code travels back inside the [`Response`], so a single bridge can be cloned
//! into any number of resource clients and used from concurrent tasks.

use crate::classify::{self, CallState};
use crate::config::{ClientConfig, StatusPolicy};
use crate::error::{Error, Result};
use crate::request::{Request, Response, Verb};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Authenticated request/response bridge.
#[derive(Clone)]
pub struct Bridge {
    config: Arc<ClientConfig>,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl Bridge {
    /// Create a bridge that talks to the network through reqwest.
    ///
    /// The access token is not checked here; a bad token fails the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a bridge over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = config.parse_base_url()?;
        Ok(Self {
            config: Arc::new(config),
            base_url,
            transport,
        })
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the shared configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Return the status policy applied by [`Bridge::fetch`].
    #[must_use]
    pub fn status_policy(&self) -> StatusPolicy {
        self.config.status_policy
    }

    /// Send a request described by a verb name.
    ///
    /// The verb is checked before anything else, so an unsupported verb never
    /// reaches the transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVerb`] for an unknown verb,
    /// [`Error::InvalidEndpoint`] for a path outside the base URL and
    /// [`Error::TransportError`] when no HTTP response was obtained.
    pub async fn send(&self, verb: &str, path: &str, body: Option<Value>) -> Result<Response> {
        let verb: Verb = verb.parse()?;
        let mut request = Request::new(verb, path);
        request.body = body;
        self.execute(request).await
    }

    /// Perform one round trip. Any status code is a successful exchange here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TransportError`] when no HTTP response was obtained,
    /// and configuration or serialization errors raised while building the
    /// request.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let http_request = self.build(&request).map_err(|err| {
            debug!(path = %request.path, state = %CallState::Built, error = %err, "Request not sent");
            err
        })?;
        debug!(
            verb = %request.verb,
            path = %request.path,
            state = %CallState::Dispatched,
            "Sending DigitalOcean request"
        );

        let result = self.transport.execute(http_request).await;

        match &result {
            Ok(response) => {
                debug!(
                    verb = %request.verb,
                    path = %request.path,
                    status = response.status(),
                    bytes = response.raw().len(),
                    "Received DigitalOcean response"
                );
                if response.body().is_none() && !response.raw().is_empty() {
                    warn!(
                        path = %request.path,
                        status = response.status(),
                        "Response body is not valid JSON"
                    );
                }
            }
            Err(err) => {
                debug!(
                    verb = %request.verb,
                    path = %request.path,
                    state = %CallState::of(&result),
                    error = %err,
                    "DigitalOcean request failed"
                );
            }
        }

        result
    }

    /// Perform a round trip and return the classified body.
    ///
    /// # Errors
    ///
    /// Returns transport errors, [`Error::AuthError`] for the unauthorized
    /// marker, and [`Error::ApiError`] under [`StatusPolicy::Strict`].
    pub async fn fetch(&self, request: Request) -> Result<Value> {
        let path = request.path.clone();
        let response = self.execute(request).await?;
        let result = classify::classify_body(response, self.status_policy());
        debug!(path = %path, state = %CallState::of(&result), "Classified response");
        result
    }

    /// Perform a round trip whose success is judged by status code alone.
    ///
    /// # Errors
    ///
    /// Returns transport errors, [`Error::AuthError`] for the unauthorized
    /// marker, and [`Error::ApiError`] for a status outside `[200, 300)`.
    pub async fn fetch_status(&self, request: Request) -> Result<bool> {
        let path = request.path.clone();
        let response = self.execute(request).await?;
        let result = classify::classify_status(&response);
        debug!(path = %path, state = %CallState::of(&result), "Classified response");
        result
    }

    fn build(&self, request: &Request) -> Result<HttpRequest> {
        Ok(HttpRequest {
            verb: request.verb,
            url: self.url(&request.path)?,
            headers: self.headers()?,
            body: request.payload()?,
        })
    }

    /// Resolve `path` under the base URL. Paths that carry their own scheme
    /// or climb above the base path are rejected.
    fn url(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        if Url::parse(relative).is_ok() {
            return Err(Error::InvalidEndpoint(format!(
                "API path `{path}` must be relative to the base URL"
            )));
        }

        let url = self
            .base_url
            .join(relative)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid API path `{path}`: {err}")))?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(Error::InvalidEndpoint(format!(
                "API path `{path}` leaves the base URL"
            )));
        }

        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.config.access_token())).map_err(
                |_| Error::ConfigError("access token is not a valid header value".to_string()),
            )?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }
}
