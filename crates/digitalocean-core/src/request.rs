//! HTTP verbs and the per-call request and response values.
//!
//! A [`Request`] is built for one call and consumed by the bridge. A
//! [`Response`] carries the status code alongside the raw and decoded body so
//! callers never need to ask the bridge about the last exchange.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP verbs supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
}

impl Verb {
    /// Returns the verb as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }

    /// Returns true if requests with this verb carry a JSON payload.
    #[must_use]
    pub const fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }

    /// Returns the matching [`reqwest::Method`].
    #[must_use]
    pub fn method(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
        }
    }
}

impl FromStr for Verb {
    type Err = Error;

    /// Parses an upper-case verb name.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            other => Err(Error::UnsupportedVerb(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One API call: verb, API-relative path and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP verb
    pub verb: Verb,
    /// Path relative to the base URL, query string included
    pub path: String,
    /// Structured body, serialized for POST, PUT and DELETE
    pub body: Option<Value>,
}

impl Request {
    /// Create a request without a body.
    #[must_use]
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a structured body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize the payload for the wire.
    ///
    /// GET and HEAD never carry a payload. POST, PUT and DELETE always do; an
    /// absent body is sent as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized.
    pub fn payload(&self) -> Result<Option<Vec<u8>>> {
        if !self.verb.carries_body() {
            return Ok(None);
        }
        let bytes = serde_json::to_vec(&self.body)?;
        Ok(Some(bytes))
    }
}

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    raw: Vec<u8>,
    body: Option<Value>,
}

impl Response {
    /// Build a response from a status code and raw body, decoding JSON when
    /// the body is non-empty.
    #[must_use]
    pub fn new(status: u16, raw: Vec<u8>) -> Self {
        let body = if raw.is_empty() {
            None
        } else {
            serde_json::from_slice(&raw).ok()
        };
        Self { status, raw, body }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns true for a status in `[200, 300)`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Raw response body.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Raw body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// Decoded body, absent when the raw body was empty or not JSON.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the response, returning the decoded body or `Value::Null`.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body.unwrap_or(Value::Null)
    }

    /// Deserialize the decoded body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is absent or does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.body.as_ref().ok_or_else(|| {
            Error::SerializationError(format!(
                "response with status {} has no JSON body",
                self.status
            ))
        })?;
        T::deserialize(body).map_err(Error::from)
    }
}
