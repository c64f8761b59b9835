//! Error types for DigitalOcean API operations.
//!
//! Every failure surfaces to the immediate caller as one of these variants. The
//! kinds split along what the caller has to do about them: fix the input
//! ([`Error::MissingAttribute`], [`Error::UnsupportedVerb`]), retry later
//! ([`Error::TransportError`]), fix credentials ([`Error::AuthError`]) or inspect
//! the status code ([`Error::ApiError`]).

use serde::Serialize;
use thiserror::Error;

/// Main error type for DigitalOcean API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The HTTP verb is not one of GET, POST, PUT, DELETE or HEAD
    #[error("Library error: unknown HTTP verb: {0}")]
    UnsupportedVerb(String),

    /// The exchange did not complete with an HTTP response
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The API reported the request as unauthorized
    #[error("API error: {message}")]
    AuthError {
        /// Message reported by the API
        message: String,
    },

    /// The API answered with a status code outside 2xx
    #[error("API error: HTTP code {status}")]
    ApiError {
        /// HTTP status code of the response
        status: u16,
        /// Message reported by the API, when the body carried one
        message: Option<String>,
    },

    /// A required attribute was absent from a request
    #[error("User error: missing required attribute: {0}")]
    MissingAttribute(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The request URL could not be built
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for DigitalOcean API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error response for serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status, for errors derived from a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedVerb(_) => "UNSUPPORTED_VERB",
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::AuthError { .. } => "UNAUTHORIZED",
            Self::ApiError { .. } => "API_ERROR",
            Self::MissingAttribute(_) => "MISSING_ATTRIBUTE",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns the HTTP status code carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Converts the error into an `ErrorResponse`.
    #[must_use]
    pub fn into_error_response(self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                status: self.status(),
                message: self.to_string(),
            },
        }
    }

    /// Returns true if re-issuing the same call later may succeed.
    ///
    /// The library itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }

    /// Returns true if the error was raised before any network activity
    /// because of the caller's input.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVerb(_)
                | Self::MissingAttribute(_)
                | Self::ValidationError(_)
                | Self::InvalidEndpoint(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::ConfigError(err.to_string())
        } else if err.is_timeout() {
            Self::TransportError(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::TransportError(format!("connection failed: {err}"))
        } else {
            Self::TransportError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
