//! Actions client and data models for the DigitalOcean API v2.
//!
//! Actions record the progress of asynchronous operations such as droplet
//! creation or power cycling.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::ActionsClient;
pub use models::{Action, ActionResponse, ActionStatus, ActionsResponse};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = digitalocean_core::Result<T>;
