//! # digitalocean-core
//!
//! Core types and utilities for talking to the DigitalOcean API v2.
//!
//! This crate owns the single request/response bridge shared by every resource
//! client: it builds an authenticated request, dispatches it, decodes the JSON
//! body and maps transport and API failures into typed errors.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and conversions
//! - [`config`] - Client configuration (access token, base URL, timeouts)
//! - [`request`] - HTTP verbs plus the per-call request and response values
//! - [`transport`] - The network seam and its reqwest implementation
//! - [`bridge`] - The transport bridge used by resource clients
//! - [`classify`] - Outcome classification for completed exchanges
//! - [`query`] - Query-string helper for API paths
//! - [`ids`] - Strongly-typed numeric resource identifiers
//! - [`types`] - Wire types shared across resources

#![cfg_attr(not(test), deny(missing_docs))]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bridge;
pub mod classify;
pub mod config;
pub mod error;
pub mod ids;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use bridge::Bridge;
pub use config::{ClientConfig, StatusPolicy, API_BASE_URL};
pub use error::{Error, Result};
pub use request::{Request, Response, Verb};
pub use transport::{ReqwestTransport, Transport};
