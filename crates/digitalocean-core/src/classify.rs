//! Outcome classification for completed exchanges.
//!
//! The API reports some authentication failures with a 200-shaped body, so the
//! decoded body is inspected before the status code is considered.

use crate::config::StatusPolicy;
use crate::error::{Error, Result};
use crate::request::Response;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Value of the body `id` field that marks an unauthorized request.
pub const UNAUTHORIZED_ID: &str = "unauthorized";

/// Lifecycle of a single call. Nothing is retried: every failure is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// Request built, not yet sent. Also terminal for calls that failed
    /// before reaching the network.
    Built,
    /// Request handed to the transport
    Dispatched,
    /// Body accepted
    Succeeded,
    /// No HTTP response was obtained
    TransportFailed,
    /// Body carried the unauthorized marker
    AuthRejected,
    /// Status code rejected by the caller's policy
    ApiRejected,
}

impl CallState {
    /// Terminal state for a classification result.
    #[must_use]
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(Error::TransportError(_)) => Self::TransportFailed,
            Err(Error::AuthError { .. }) => Self::AuthRejected,
            Err(Error::ApiError { .. }) => Self::ApiRejected,
            Err(_) => Self::Built,
        }
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Built => "built",
            Self::Dispatched => "dispatched",
            Self::Succeeded => "succeeded",
            Self::TransportFailed => "transport_failed",
            Self::AuthRejected => "auth_rejected",
            Self::ApiRejected => "api_rejected",
        };
        f.write_str(name)
    }
}

/// Fail with [`Error::AuthError`] when the body carries `"id": "unauthorized"`.
///
/// # Errors
///
/// Returns the auth error; the status code is not consulted.
pub fn check_auth(response: &Response) -> Result<()> {
    let Some(body) = response.body() else {
        return Ok(());
    };

    if body.get("id").and_then(Value::as_str) == Some(UNAUTHORIZED_ID) {
        let message = api_message(body).unwrap_or_default();
        warn!(status = response.status(), %message, "API rejected credentials");
        return Err(Error::AuthError { message });
    }

    Ok(())
}

/// Classify a response from an operation that returns a body.
///
/// Under [`StatusPolicy::Lenient`] the decoded body is returned whatever the
/// status code; an absent body becomes `Value::Null`.
///
/// # Errors
///
/// Returns [`Error::AuthError`] for the unauthorized marker, and
/// [`Error::ApiError`] for a non-2xx status under [`StatusPolicy::Strict`].
pub fn classify_body(response: Response, policy: StatusPolicy) -> Result<Value> {
    check_auth(&response)?;

    if policy == StatusPolicy::Strict && !response.is_success() {
        warn!(status = response.status(), "non-success status rejected");
        return Err(status_error(&response));
    }

    Ok(response.into_body())
}

/// Classify a response from an operation whose success is judged by status
/// alone.
///
/// # Errors
///
/// Returns [`Error::AuthError`] for the unauthorized marker, and
/// [`Error::ApiError`] for a status outside `[200, 300)`.
pub fn classify_status(response: &Response) -> Result<bool> {
    check_auth(response)?;

    if response.is_success() {
        Ok(true)
    } else {
        Err(status_error(response))
    }
}

fn status_error(response: &Response) -> Error {
    Error::ApiError {
        status: response.status(),
        message: response.body().and_then(api_message),
    }
}

fn api_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
