//! Configuration structures for DigitalOcean clients.
//!
//! A [`ClientConfig`] is created once per client and shared read-only by every
//! resource client built from it. The access token is held as a secret and is
//! never checked up front: an empty or revoked token surfaces as an error on
//! the first call.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Base URL of the DigitalOcean API v2.
pub const API_BASE_URL: &str = "https://api.digitalocean.com/v2/";

/// How non-2xx responses are treated on operations that return a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Return the decoded body whatever the status code.
    #[default]
    Lenient,
    /// Fail with [`Error::ApiError`] when the status is outside 2xx.
    Strict,
}

/// Configuration for a DigitalOcean client instance.
#[derive(Debug, Deserialize, Validate)]
pub struct ClientConfig {
    /// Personal access token sent as a bearer credential
    #[serde(deserialize_with = "deserialize_token")]
    access_token: SecretString,

    /// API base URL
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds; transport default when unset
    #[validate(range(min = 1, max = 300))]
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds; transport default when unset
    #[validate(range(min = 1, max = 60))]
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// Treatment of non-2xx responses on body-returning operations
    #[serde(default)]
    pub status_policy: StatusPolicy,

    /// User agent installed on the HTTP client
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl ClientConfig {
    /// Create a configuration for the public API endpoint.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            base_url: default_base_url(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            status_policy: StatusPolicy::Lenient,
            user_agent: None,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the whole-request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set the connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = Some(seconds);
        self
    }

    /// Set the status policy for body-returning operations.
    #[must_use]
    pub const fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Access the bearer token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// Get the request timeout as a Duration, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Get the connect timeout as a Duration, if set.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration and parse the base URL.
    ///
    /// A missing trailing slash is added so that relative paths extend the
    /// base path instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
